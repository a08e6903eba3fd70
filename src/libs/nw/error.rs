use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum NwError {
    /// Malformed substitution matrix input
    Format {
        /// A human-readable message explaining the error
        message: String,
        /// The line number (1-based)
        line: usize,
    },
    /// A symbol pair absent from the substitution matrix
    NotFound {
        /// Symbol from the first sequence
        a: char,
        /// Symbol from the second sequence
        b: char,
    },
    /// A gap penalty that does not penalize
    InvalidPenalty {
        /// Which penalty ("gap_open" or "gap_extend")
        which: &'static str,
        value: f64,
    },
}

impl fmt::Display for NwError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NwError::Format { message, line } => {
                write!(f, "Matrix format error at line {}: {}", line, message)
            }
            NwError::NotFound { a, b } => {
                write!(f, "Symbol pair ({}, {}) not found in the substitution matrix", a, b)
            }
            NwError::InvalidPenalty { which, value } => {
                write!(f, "{} must be negative, got {}", which, value)
            }
        }
    }
}

impl std::error::Error for NwError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NwError::Format {
            message: "row length mismatch: expected 4 scores, got 3".to_string(),
            line: 7,
        };
        assert_eq!(
            err.to_string(),
            "Matrix format error at line 7: row length mismatch: expected 4 scores, got 3"
        );

        let err = NwError::NotFound { a: 'M', b: 'J' };
        assert_eq!(
            err.to_string(),
            "Symbol pair (M, J) not found in the substitution matrix"
        );

        let err = NwError::InvalidPenalty {
            which: "gap_open",
            value: 10.0,
        };
        assert_eq!(err.to_string(), "gap_open must be negative, got 10");
    }
}
