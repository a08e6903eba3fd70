/// Which of the three DP layers a traceback tag points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Diagonal layer, both symbols consumed
    M,
    /// Gap in the second sequence, a symbol of the first consumed
    GapA,
    /// Gap in the first sequence, a symbol of the second consumed
    GapB,
}

/// A dense row-major matrix of `(len_a + 1) x (len_b + 1)` cells.
///
/// Row index runs over the first sequence, column index over the second;
/// row 0 / column 0 are the empty-prefix boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Mat<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Cell scores of one DP layer.
pub type ScoreMat = Mat<f64>;
/// Companion traceback tags; `None` marks a cell no optimal path reaches.
pub type TraceMat = Mat<Option<Layer>>;

impl<T: Copy> Mat<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Builds a matrix from explicit rows. Panics on ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Self {
        let n_rows = rows.len();
        let n_cols = if n_rows == 0 { 0 } else { rows[0].len() };

        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            assert_eq!(row.len(), n_cols, "ragged rows");
            data.extend_from_slice(row);
        }

        Self {
            rows: n_rows,
            cols: n_cols,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.cols + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.cols + j] = value;
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}
