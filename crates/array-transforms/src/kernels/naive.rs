//! Element-by-element kernels.
//!
//! Each function walks its input with explicit index loops, mirroring the
//! textbook definition of the operation.

use crate::config::DiagonalPolicy;
use crate::encoding::RunLengthEncoding;
use crate::error::ArrayOpError;
use crate::kernels::kernel_trait::ArrayKernels;
use crate::kernels::validate::{
    has_incomparable, require_channels, require_nonempty, require_point_dims, sorted_copy, to_f64,
    CHANNELS,
};
use crate::math::{Array1, Array2, Array3, Scalar};

/// Loop-based backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveKernels {
    diagonal_policy: DiagonalPolicy,
}

impl NaiveKernels {
    pub fn new(diagonal_policy: DiagonalPolicy) -> Self {
        NaiveKernels { diagonal_policy }
    }
}

impl<T: Scalar> ArrayKernels<T> for NaiveKernels {
    fn diagonal_product(&self, matrix: &Array2<T>) -> Result<T, ArrayOpError> {
        diagonal_product_with(matrix, self.diagonal_policy)
    }

    fn multisets_equal(&self, x: &Array1<T>, y: &Array1<T>) -> Result<bool, ArrayOpError> {
        multisets_equal(x, y)
    }

    fn max_after_zero(&self, x: &Array1<T>) -> Result<T, ArrayOpError> {
        max_after_zero(x)
    }

    fn weighted_channel_sum(
        &self,
        image: &Array3<T>,
        coefs: &Array1<T>,
    ) -> Result<Array2<T>, ArrayOpError> {
        weighted_channel_sum(image, coefs)
    }

    fn run_length_encode(&self, x: &Array1<T>) -> Result<RunLengthEncoding<T>, ArrayOpError> {
        run_length_encode(x)
    }

    fn pairwise_euclidean_distance(
        &self,
        x: &Array2<T>,
        y: &Array2<T>,
    ) -> Result<Array2<f64>, ArrayOpError> {
        pairwise_euclidean_distance(x, y)
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Product of the nonzero main-diagonal entries of `matrix`.
///
/// Only the first `min(rows, cols)` diagonal positions exist, so
/// rectangular matrices are accepted. Negative entries are included.
/// Integer products that leave the range of `T` yield `Overflow`.
pub fn diagonal_product<T: Scalar>(matrix: &Array2<T>) -> Result<T, ArrayOpError> {
    diagonal_product_with(matrix, DiagonalPolicy::NonZero)
}

pub fn diagonal_product_with<T: Scalar>(
    matrix: &Array2<T>,
    policy: DiagonalPolicy,
) -> Result<T, ArrayOpError> {
    log::trace!("diagonal_product: shape {:?}", matrix.shape());
    let mut product = T::one();
    for i in 0..matrix.nrows().min(matrix.ncols()) {
        let value = matrix[(i, i)];
        if policy.keeps(value) {
            product = product
                .checked_mul(value)
                .ok_or(ArrayOpError::Overflow { op: "diagonal_product" })?;
        }
    }
    Ok(product)
}

/// Whether `x` and `y` contain the same values with the same multiplicities.
///
/// Sequences of different length are never equal. The inputs are left
/// untouched; sorting happens on private copies.
pub fn multisets_equal<T: Scalar>(x: &Array1<T>, y: &Array1<T>) -> Result<bool, ArrayOpError> {
    if x.len() != y.len() {
        log::trace!("multisets_equal: lengths {} and {} differ", x.len(), y.len());
        return Ok(false);
    }
    if has_incomparable(x.as_slice()) || has_incomparable(y.as_slice()) {
        return Ok(false);
    }

    let xs = sorted_copy(x.as_slice());
    let ys = sorted_copy(y.as_slice());
    for i in 0..xs.len() {
        if xs[i] != ys[i] {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Largest element that directly follows a zero, scanning left to right.
///
/// Returns zero when no zero is followed by another element.
pub fn max_after_zero<T: Scalar>(x: &Array1<T>) -> Result<T, ArrayOpError> {
    require_nonempty("max_after_zero", x)?;

    let mut best: Option<T> = None;
    for i in 1..x.len() {
        if !x[i - 1].is_zero() {
            continue;
        }
        let candidate = x[i];
        best = match best {
            Some(current) if current >= candidate => Some(current),
            _ => Some(candidate),
        };
    }
    Ok(best.unwrap_or_else(T::zero))
}

/// Collapse an H x W x 3 image into H x W by weighting each channel.
pub fn weighted_channel_sum<T: Scalar>(
    image: &Array3<T>,
    coefs: &Array1<T>,
) -> Result<Array2<T>, ArrayOpError> {
    require_channels("weighted_channel_sum", image, coefs)?;
    log::trace!("weighted_channel_sum: shape {:?}", image.shape());

    let (height, width, _) = image.shape();
    let mut out = Vec::with_capacity(height * width);
    for row in 0..height {
        for col in 0..width {
            let mut acc = T::zero();
            for channel in 0..CHANNELS {
                acc = image[(row, col, channel)]
                    .checked_mul(coefs[channel])
                    .and_then(|term| acc.checked_add(term))
                    .ok_or(ArrayOpError::Overflow { op: "weighted_channel_sum" })?;
            }
            out.push(acc);
        }
    }
    Ok(Array2::from_shape_vec((height, width), out)?)
}

/// Split `x` into maximal runs of equal consecutive values.
pub fn run_length_encode<T: Scalar>(x: &Array1<T>) -> Result<RunLengthEncoding<T>, ArrayOpError> {
    require_nonempty("run_length_encode", x)?;

    let mut values = Vec::new();
    let mut counts = Vec::new();
    let mut current = x[0];
    let mut run = 0usize;
    for &value in x.iter() {
        if value == current {
            run += 1;
        } else {
            values.push(current);
            counts.push(run);
            current = value;
            run = 1;
        }
    }
    values.push(current);
    counts.push(run);

    Ok(RunLengthEncoding::from_runs(values, counts))
}

/// Euclidean distance between every row of `x` and every row of `y`.
///
/// Coordinates are widened to `f64` before subtracting, so integer point
/// sets neither overflow nor truncate.
pub fn pairwise_euclidean_distance<T: Scalar>(
    x: &Array2<T>,
    y: &Array2<T>,
) -> Result<Array2<f64>, ArrayOpError> {
    require_point_dims("pairwise_euclidean_distance", x, y)?;
    log::trace!(
        "pairwise_euclidean_distance: {:?} against {:?}",
        x.shape(),
        y.shape()
    );

    let dims = x.ncols();
    let mut out = Vec::with_capacity(x.nrows() * y.nrows());
    for p in 0..x.nrows() {
        for q in 0..y.nrows() {
            let mut sum = 0.0f64;
            for d in 0..dims {
                let diff = to_f64(x[(p, d)]) - to_f64(y[(q, d)]);
                sum += diff * diff;
            }
            out.push(sum.sqrt());
        }
    }
    Ok(Array2::from_shape_vec((x.nrows(), y.nrows()), out)?)
}
