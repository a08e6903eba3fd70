use super::error::NwError;
use super::matrix::{Layer, Mat, ScoreMat, TraceMat};
use super::sub_matrix::SubMatrix;

/// Global affine-gap aligner over a borrowed substitution matrix.
///
/// Three DP layers are filled per alignment: `M` for columns consuming a
/// symbol from both sequences, `GapA` for gaps in the second sequence and
/// `GapB` for gaps in the first. Opening a gap costs
/// `gap_open + gap_extend`, each further column of the same run costs
/// `gap_extend`. The matrices of the most recent successful `align()` stay
/// readable through the accessors.
///
/// ```
/// use nwa::libs::nw::{Aligner, SubMatrix};
///
/// let table = SubMatrix::blosum62().unwrap();
/// let mut aligner = Aligner::new(&table, -10.0, -1.0).unwrap();
/// let (score, a, b) = aligner.align("MAVHQLIRRP", "MQLIRHP").unwrap();
/// assert_eq!(score, 17.0);
/// assert_eq!(a, "MAVHQLIRRP");
/// assert_eq!(b, "M---QLIRHP");
/// ```
#[derive(Debug)]
pub struct Aligner<'a> {
    table: &'a SubMatrix,
    gap_open: f64,
    gap_extend: f64,
    last: Option<Matrices>,
}

#[derive(Debug)]
struct Matrices {
    m: ScoreMat,
    gap_a: ScoreMat,
    gap_b: ScoreMat,
    tb_m: TraceMat,
    tb_a: TraceMat,
    tb_b: TraceMat,
    score: f64,
}

// First strictly greater candidate wins, so ties resolve to the earliest
// layer in M, GapA, GapB order (the high road).
fn argmax3(m: f64, gap_a: f64, gap_b: f64) -> (f64, Layer) {
    let mut best = m;
    let mut layer = Layer::M;
    if gap_a > best {
        best = gap_a;
        layer = Layer::GapA;
    }
    if gap_b > best {
        best = gap_b;
        layer = Layer::GapB;
    }
    (best, layer)
}

impl<'a> Aligner<'a> {
    /// Both penalties must be negative.
    pub fn new(table: &'a SubMatrix, gap_open: f64, gap_extend: f64) -> Result<Self, NwError> {
        if !(gap_open < 0.0) {
            return Err(NwError::InvalidPenalty {
                which: "gap_open",
                value: gap_open,
            });
        }
        if !(gap_extend < 0.0) {
            return Err(NwError::InvalidPenalty {
                which: "gap_extend",
                value: gap_extend,
            });
        }

        Ok(Self {
            table,
            gap_open,
            gap_extend,
            last: None,
        })
    }

    pub fn gap_open(&self) -> f64 {
        self.gap_open
    }

    pub fn gap_extend(&self) -> f64 {
        self.gap_extend
    }

    /// Aligns two sequences end to end.
    ///
    /// Returns `(score, aligned_a, aligned_b)`; the aligned strings carry
    /// `-` for gap columns. Fails if a symbol pair is missing from the
    /// substitution matrix, in which case no matrices are retained.
    pub fn align(&mut self, seq_a: &str, seq_b: &str) -> Result<(f64, String, String), NwError> {
        self.last = None;

        let a: Vec<char> = seq_a.chars().collect();
        let b: Vec<char> = seq_b.chars().collect();

        let (dp, start) = self.fill(&a, &b)?;
        let (aligned_a, aligned_b) = backtrace(&dp, &a, &b, start);

        let score = dp.score;
        self.last = Some(dp);

        Ok((score, aligned_a, aligned_b))
    }

    /// Diagonal-layer scores from the most recent successful alignment.
    pub fn align_matrix(&self) -> Option<&ScoreMat> {
        self.last.as_ref().map(|dp| &dp.m)
    }

    /// Gap-in-B layer scores from the most recent successful alignment.
    pub fn gap_a_matrix(&self) -> Option<&ScoreMat> {
        self.last.as_ref().map(|dp| &dp.gap_a)
    }

    /// Gap-in-A layer scores from the most recent successful alignment.
    pub fn gap_b_matrix(&self) -> Option<&ScoreMat> {
        self.last.as_ref().map(|dp| &dp.gap_b)
    }

    /// Score of the most recent successful alignment.
    pub fn score(&self) -> Option<f64> {
        self.last.as_ref().map(|dp| dp.score)
    }

    fn fill(&self, a: &[char], b: &[char]) -> Result<(Matrices, Layer), NwError> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;

        let mut m: ScoreMat = Mat::filled(rows, cols, f64::NEG_INFINITY);
        let mut gap_a: ScoreMat = Mat::filled(rows, cols, f64::NEG_INFINITY);
        let mut gap_b: ScoreMat = Mat::filled(rows, cols, f64::NEG_INFINITY);

        let mut tb_m: TraceMat = Mat::filled(rows, cols, None);
        let mut tb_a: TraceMat = Mat::filled(rows, cols, None);
        let mut tb_b: TraceMat = Mat::filled(rows, cols, None);

        // Empty prefixes: i leading symbols against nothing is a single
        // gap run of length i.
        m.set(0, 0, 0.0);
        for i in 0..rows {
            gap_a.set(i, 0, self.gap_open + i as f64 * self.gap_extend);
        }
        for j in 0..cols {
            gap_b.set(0, j, self.gap_open + j as f64 * self.gap_extend);
        }

        for i in 1..rows {
            for j in 1..cols {
                let sub = self.table.score(a[i - 1], b[j - 1])?;

                let (diag, tag) = argmax3(
                    m.get(i - 1, j - 1),
                    gap_a.get(i - 1, j - 1),
                    gap_b.get(i - 1, j - 1),
                );
                m.set(i, j, sub + diag);
                tb_m.set(i, j, Some(tag));

                // Gap in B: step down a row, opening or extending
                let (best, tag) = argmax3(
                    self.gap_open + self.gap_extend + m.get(i - 1, j),
                    self.gap_extend + gap_a.get(i - 1, j),
                    self.gap_open + self.gap_extend + gap_b.get(i - 1, j),
                );
                gap_a.set(i, j, best);
                tb_a.set(i, j, Some(tag));

                // Gap in A: step right a column
                let (best, tag) = argmax3(
                    self.gap_open + self.gap_extend + m.get(i, j - 1),
                    self.gap_open + self.gap_extend + gap_a.get(i, j - 1),
                    self.gap_extend + gap_b.get(i, j - 1),
                );
                gap_b.set(i, j, best);
                tb_b.set(i, j, Some(tag));
            }
        }

        // The boundary column and row can only continue their own gap run
        for i in 1..rows {
            tb_a.set(i, 0, Some(Layer::GapA));
        }
        for j in 1..cols {
            tb_b.set(0, j, Some(Layer::GapB));
        }

        let (score, start) = argmax3(
            m.get(rows - 1, cols - 1),
            gap_a.get(rows - 1, cols - 1),
            gap_b.get(rows - 1, cols - 1),
        );

        let dp = Matrices {
            m,
            gap_a,
            gap_b,
            tb_m,
            tb_a,
            tb_b,
            score,
        };
        Ok((dp, start))
    }
}

fn backtrace(dp: &Matrices, a: &[char], b: &[char], start: Layer) -> (String, String) {
    let mut out_a: Vec<char> = vec![];
    let mut out_b: Vec<char> = vec![];

    let mut i = a.len();
    let mut j = b.len();
    let mut layer = start;

    while i > 0 || j > 0 {
        match layer {
            Layer::M => {
                assert!(i > 0 && j > 0, "traceback escaped the grid");
                out_a.push(a[i - 1]);
                out_b.push(b[j - 1]);
                layer = dp.tb_m.get(i, j).expect("untagged cell in M traceback");
                i -= 1;
                j -= 1;
            }
            Layer::GapA => {
                assert!(i > 0, "traceback escaped the grid");
                out_a.push(a[i - 1]);
                out_b.push('-');
                layer = dp.tb_a.get(i, j).expect("untagged cell in GapA traceback");
                i -= 1;
            }
            Layer::GapB => {
                assert!(j > 0, "traceback escaped the grid");
                out_a.push('-');
                out_b.push(b[j - 1]);
                layer = dp.tb_b.get(i, j).expect("untagged cell in GapB traceback");
                j -= 1;
            }
        }
    }

    (out_a.iter().rev().collect(), out_b.iter().rev().collect())
}
