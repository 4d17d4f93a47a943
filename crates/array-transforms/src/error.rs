use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Failure raised by a kernel. Shape and emptiness are checked before any
/// computation starts; overflow is detected while accumulating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayOpError {
    /// Dimensions that must agree do not.
    ShapeMismatch {
        op: &'static str,
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// The operation needs at least one element.
    EmptyInput { op: &'static str },
    /// Integer arithmetic left the range of the element type.
    Overflow { op: &'static str },
}

impl ArrayOpError {
    pub(crate) fn shape_mismatch(op: &'static str, expected: Vec<usize>, found: Vec<usize>) -> Self {
        ArrayOpError::ShapeMismatch {
            op,
            expected,
            found,
        }
    }
}

impl fmt::Display for ArrayOpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArrayOpError::ShapeMismatch {
                op,
                expected,
                found,
            } => write!(
                f,
                "{}: expected shape {:?}, found {:?}",
                op, expected, found
            ),
            ArrayOpError::EmptyInput { op } => {
                write!(f, "{}: input must contain at least one element", op)
            }
            ArrayOpError::Overflow { op } => {
                write!(f, "{}: arithmetic overflow for the element type", op)
            }
        }
    }
}

impl Error for ArrayOpError {}

impl From<ShapeError> for ArrayOpError {
    fn from(err: ShapeError) -> Self {
        ArrayOpError::ShapeMismatch {
            op: "from_shape_vec",
            expected: err.shape().to_vec(),
            found: vec![err.buffer_len()],
        }
    }
}
