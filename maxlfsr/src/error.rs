use thiserror::Error;

use crate::def::{MAX_WIDTH, MIN_WIDTH};

/// Errors raised while building a register.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LfsrError {
    /// The requested width has no maximal-length tap set
    #[error("Invalid register width {width}. Width must be between {min} and {max}")]
    OutOfRange { width: usize, min: usize, max: usize },
}

impl LfsrError {
    /// Builds the error for a width outside `MIN_WIDTH..=MAX_WIDTH`.
    pub fn out_of_range(width: usize) -> Self {
        LfsrError::OutOfRange {
            width,
            min: MIN_WIDTH,
            max: MAX_WIDTH,
        }
    }
}

impl From<LfsrError> for String {
    fn from(error: LfsrError) -> Self {
        error.to_string()
    }
}

/// Validates a register width.
///
/// # Returns
/// * `Ok(width)` - If `MIN_WIDTH <= width <= MAX_WIDTH`
/// * `Err(LfsrError::OutOfRange)` - Otherwise
pub fn check_width(width: usize) -> Result<usize, LfsrError> {
    if (MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(LfsrError::out_of_range(width))
    }
}
