//! Boundary checks shared by both backends.

use std::cmp::Ordering;

use num_traits::AsPrimitive;

use crate::error::ArrayOpError;
use crate::math::{Array1, Array2, Array3, Scalar};

/// Length of the channel axis every image must have.
pub const CHANNELS: usize = 3;

pub(crate) fn require_nonempty<T>(op: &'static str, x: &Array1<T>) -> Result<(), ArrayOpError> {
    if x.is_empty() {
        return Err(ArrayOpError::EmptyInput { op });
    }
    Ok(())
}

pub(crate) fn require_channels<T>(
    op: &'static str,
    image: &Array3<T>,
    coefs: &Array1<T>,
) -> Result<(), ArrayOpError> {
    let (height, width, channels) = image.shape();
    if channels != CHANNELS {
        return Err(ArrayOpError::shape_mismatch(
            op,
            vec![height, width, CHANNELS],
            vec![height, width, channels],
        ));
    }
    if coefs.len() != CHANNELS {
        return Err(ArrayOpError::shape_mismatch(
            op,
            vec![CHANNELS],
            vec![coefs.len()],
        ));
    }
    Ok(())
}

pub(crate) fn require_point_dims<T>(
    op: &'static str,
    x: &Array2<T>,
    y: &Array2<T>,
) -> Result<(), ArrayOpError> {
    if x.ncols() != y.ncols() {
        return Err(ArrayOpError::shape_mismatch(
            op,
            vec![y.nrows(), x.ncols()],
            vec![y.nrows(), y.ncols()],
        ));
    }
    Ok(())
}

/// True when some value is not comparable with itself (NaN).
pub(crate) fn has_incomparable<T: PartialOrd>(values: &[T]) -> bool {
    values.iter().any(|v| v.partial_cmp(v).is_none())
}

/// Ascending order. Callers rule out NaN first so the order is total.
pub(crate) fn ascending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub(crate) fn sorted_copy<T: Scalar>(values: &[T]) -> Vec<T> {
    let mut sorted = values.to_vec();
    sorted.sort_by(ascending);
    sorted
}

#[inline]
pub(crate) fn to_f64<T: Scalar>(value: T) -> f64 {
    AsPrimitive::<f64>::as_(value)
}
