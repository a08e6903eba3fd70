use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Result;

use super::error::NwError;

const BLOSUM62_MAT: &str = include_str!("../../../matrices/BLOSUM62.mat");
const PAM250_MAT: &str = include_str!("../../../matrices/PAM250.mat");

/// A residue substitution matrix for alignment scoring.
///
/// Keys are `(symbol_a, symbol_b)` pairs, scores are `f64`. Lookups are
/// exact; the parser uppercases the alphabet, so callers are expected to
/// uppercase sequence symbols.
#[derive(Debug)]
pub struct SubMatrix {
    scores: HashMap<(char, char), f64>,
    alphabet: Vec<char>,
}

impl SubMatrix {
    /// Load from a preset name (BLOSUM62, PAM250) or a file path.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "blosum62" => Self::blosum62(),
            "pam250" => Self::pam250(),
            _ => Self::from_file(name),
        }
    }

    /// BLOSUM62, the BLAST default for proteins.
    pub fn blosum62() -> Result<Self> {
        Self::from_reader(BLOSUM62_MAT.as_bytes())
    }

    /// PAM250, for distantly related proteins.
    pub fn pam250() -> Result<Self> {
        Self::from_reader(PAM250_MAT.as_bytes())
    }

    /// Load a substitution matrix from a file (NCBI format).
    ///
    /// Lines starting with '#' and blank lines are comments, allowed only
    /// ahead of the header. The header line lists the alphabet; each of the
    /// next `alphabet` lines supplies one row of scores, column order
    /// matching the header. Lines beyond the square table are ignored.
    pub fn from_file(path: &str) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut scores = HashMap::new();
        let mut alphabet: Vec<char> = vec![];
        let mut rows_read = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if alphabet.is_empty() {
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Header line: the alphabet, uppercased
                for part in line.split_whitespace() {
                    let upper = part.to_uppercase();
                    let mut chars = upper.chars();
                    match (chars.next(), chars.next()) {
                        (Some(sym), None) => alphabet.push(sym),
                        _ => {
                            return Err(NwError::Format {
                                message: format!(
                                    "alphabet symbol `{}` is not a single character",
                                    part
                                ),
                                line: idx + 1,
                            }
                            .into());
                        }
                    }
                }
            } else if rows_read < alphabet.len() {
                let parts: Vec<&str> = line.split_whitespace().collect();
                if parts.len() != alphabet.len() {
                    return Err(NwError::Format {
                        message: format!(
                            "row length mismatch: expected {} scores, got {}",
                            alphabet.len(),
                            parts.len()
                        ),
                        line: idx + 1,
                    }
                    .into());
                }

                let row_sym = alphabet[rows_read];
                for (col, part) in parts.iter().enumerate() {
                    let score: f64 = part.parse().map_err(|_| NwError::Format {
                        message: format!("malformed score `{}`", part),
                        line: idx + 1,
                    })?;
                    scores.insert((alphabet[col], row_sym), score);
                }
                rows_read += 1;
            } else {
                break;
            }
        }

        Ok(SubMatrix { scores, alphabet })
    }

    /// The substitution score for a symbol pair.
    pub fn score(&self, a: char, b: char) -> Result<f64, NwError> {
        match self.scores.get(&(a, b)) {
            Some(&score) => Ok(score),
            None => Err(NwError::NotFound { a, b }),
        }
    }

    /// Header symbols, in file order.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}
