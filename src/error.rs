use thiserror::Error;

/// Errors raised by network construction, propagation and training.
///
/// Shape and dimension errors are caller contract violations: nothing inside
/// the crate retries or recovers from them.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid dimension in {context}: layer sizes must be positive")]
    InvalidDimension { context: &'static str },

    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;

/// Returns `ShapeMismatch` unless `actual == expected`.
pub(crate) fn ensure_len(context: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetworkError::ShapeMismatch { context, expected, actual })
    }
}
