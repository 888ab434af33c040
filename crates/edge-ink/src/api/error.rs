//! Error type for the edge-ink public API.

use std::fmt;

/// Reasons an input buffer cannot be stylized.
///
/// Everything past input validation is total: statistical corner cases
/// (flat images, no line pixels, no separators) are absorbed by the stages.
///
/// # Example
///
/// ```
/// use edge_ink::{EdgeStylizer, StylizeError};
///
/// let err = EdgeStylizer::new().stylize_rgb8(&[0; 5], 1, 2).unwrap_err();
/// assert_eq!(err, StylizeError::LengthMismatch { expected: 6, actual: 5 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylizeError {
    /// Width or height is zero
    EmptyImage { width: usize, height: usize },
    /// Buffer length is not `width * height * 3`
    LengthMismatch { expected: usize, actual: usize },
    /// `width * height * 3` does not fit in `usize`
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for StylizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StylizeError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({}x{})", width, height)
            }
            StylizeError::LengthMismatch { expected, actual } => write!(
                f,
                "RGB buffer has {} bytes, expected {}",
                actual, expected
            ),
            StylizeError::TooLarge { width, height } => {
                write!(f, "image dimensions {}x{} overflow", width, height)
            }
        }
    }
}

impl std::error::Error for StylizeError {}
