//! Needleman-Wunsch global alignment with affine gap penalties.
//!
//! This module implements end-to-end pairwise alignment in the Gotoh
//! three-matrix formulation, scored by a residue substitution matrix.
//!
//! # Core Components
//!
//! * [`sub_matrix`] - Substitution matrices (BLOSUM62, PAM250, or any
//!   square-table file).
//! * [`matrix`] - Dense DP matrices and traceback tags.
//! * [`aligner`] - Matrix fill and traceback.
//! * [`error`] - Typed errors for parsing and alignment setup.
//!
//! # Algorithm Overview
//!
//! 1. Three score layers are filled over the `(len_a + 1) x (len_b + 1)`
//!    grid: `M` (both symbols consumed), `GapA` (gap in the second
//!    sequence) and `GapB` (gap in the first).
//! 2. A gap run of length L costs `gap_open + L * gap_extend`; switching
//!    layers pays the opening again.
//! 3. Each cell records which layer won, ties resolving to `M`, then
//!    `GapA`, then `GapB` (the high road).
//! 4. The final score is the best corner value; traceback follows the
//!    recorded tags to (0, 0) and emits the two gapped strings.

pub mod aligner;
pub mod error;
pub mod matrix;
pub mod sub_matrix;

pub use aligner::Aligner;
pub use error::NwError;
pub use matrix::{Layer, Mat, ScoreMat, TraceMat};
pub use sub_matrix::SubMatrix;
