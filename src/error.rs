//! Crate error types.
//!
//! Every failure is terminal for the invocation that produced it: callers get
//! the error with enough context to report it (the offending line for parse
//! failures) and decide what to do. The crate itself never retries, logs, or
//! exits the process.

use thiserror::Error;

/// Errors produced while loading a connectivity matrix or ranking it.
#[derive(Debug, Error)]
pub enum WebRankError {
    /// The connectivity source could not be opened or read.
    #[error("unable to read connectivity source: {0}")]
    Io(#[from] std::io::Error),

    /// The input text does not encode a square digit matrix.
    ///
    /// `line` is 1-based, matching the node numbering in reports.
    #[error("malformed connectivity input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// The matrix dimension is unusable (division by the node count is
    /// part of the algorithm).
    #[error("invalid matrix dimension {0}, expected at least 1")]
    InvalidDimension(usize),
}

impl WebRankError {
    /// Build a [`WebRankError::MalformedInput`] with a 1-based line number.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WebRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_carries_line() {
        let err = WebRankError::malformed(3, "row shorter than dimension 5");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("dimension 5"));
    }

    #[test]
    fn test_io_error_converts() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "web.txt"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(WebRankError::Io(_))));
    }

    #[test]
    fn test_invalid_dimension_display() {
        let err = WebRankError::InvalidDimension(0);
        assert!(err.to_string().contains("dimension 0"));
    }
}
