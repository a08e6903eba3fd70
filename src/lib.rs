//! `nwa` - Needleman-Wunsch global alignment of biological sequences.
//!
//! End-to-end pairwise alignment with affine gap penalties, scored by a
//! substitution matrix (BLOSUM62, PAM250, or a user-supplied table).

pub mod libs;

pub use crate::libs::io::{reader, writer};
pub use crate::libs::nw::{Aligner, SubMatrix};
