//! Whole-array kernels over `ndarray` views.
//!
//! These compute the same results as `naive` with masks, zips, axis
//! reductions and broadcasting instead of per-element index loops.

use std::iter;

use ndarray::{s, Axis, Zip};

use crate::config::DiagonalPolicy;
use crate::encoding::RunLengthEncoding;
use crate::error::ArrayOpError;
use crate::kernels::kernel_trait::ArrayKernels;
use crate::kernels::validate::{
    ascending, has_incomparable, require_channels, require_nonempty, require_point_dims, to_f64,
};
use crate::math::{Array1, Array2, Array3, Scalar};

/// `ndarray`-backed backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorizedKernels {
    diagonal_policy: DiagonalPolicy,
}

impl VectorizedKernels {
    pub fn new(diagonal_policy: DiagonalPolicy) -> Self {
        VectorizedKernels { diagonal_policy }
    }
}

impl<T: Scalar> ArrayKernels<T> for VectorizedKernels {
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
        "vectorized"
    }
}

pub fn diagonal_product<T: Scalar>(matrix: &Array2<T>) -> Result<T, ArrayOpError> {
    diagonal_product_with(matrix, DiagonalPolicy::NonZero)
}

/// Replace the entries the policy rejects with one, then reduce by checked
/// product.
pub fn diagonal_product_with<T: Scalar>(
    matrix: &Array2<T>,
    policy: DiagonalPolicy,
) -> Result<T, ArrayOpError> {
    let view = matrix.view();
    let kept = view
        .diag()
        .mapv(|d| if policy.keeps(d) { d } else { T::one() });
    kept.fold(Some(T::one()), |acc, &d| acc.and_then(|p| p.checked_mul(d)))
        .ok_or(ArrayOpError::Overflow { op: "diagonal_product" })
}

pub fn multisets_equal<T: Scalar>(x: &Array1<T>, y: &Array1<T>) -> Result<bool, ArrayOpError> {
    if x.len() != y.len() {
        return Ok(false);
    }
    if has_incomparable(x.as_slice()) || has_incomparable(y.as_slice()) {
        return Ok(false);
    }

    let mut xs = x.view().to_owned();
    let mut ys = y.view().to_owned();
    // Owned copies are in standard layout, so both slices exist.
    if let Some(values) = xs.as_slice_mut() {
        values.sort_by(ascending);
    }
    if let Some(values) = ys.as_slice_mut() {
        values.sort_by(ascending);
    }
    Ok(Zip::from(&xs).and(&ys).fold(true, |eq, a, b| eq && a == b))
}

/// Pair every element with its predecessor and fold over the pairs whose
/// predecessor is zero.
pub fn max_after_zero<T: Scalar>(x: &Array1<T>) -> Result<T, ArrayOpError> {
    require_nonempty("max_after_zero", x)?;

    let view = x.view();
    let prev = view.slice(s![..-1]);
    let next = view.slice(s![1..]);
    let best = Zip::from(&prev)
        .and(&next)
        .fold(None, |best: Option<T>, &p, &n| {
            if !p.is_zero() {
                return best;
            }
            match best {
                Some(current) if current >= n => Some(current),
                _ => Some(n),
            }
        });
    Ok(best.unwrap_or_else(T::zero))
}

/// Reduce the channel axis of the image against `coefs`.
pub fn weighted_channel_sum<T: Scalar>(
    image: &Array3<T>,
    coefs: &Array1<T>,
) -> Result<Array2<T>, ArrayOpError> {
    require_channels("weighted_channel_sum", image, coefs)?;

    let view = image.view();
    let weights = coefs.view();
    let sums = view.map_axis(Axis(2), |pixel| {
        Zip::from(&pixel)
            .and(&weights)
            .fold(Some(T::zero()), |acc, &value, &weight| {
                acc.and_then(|a| value.checked_mul(weight).and_then(|term| a.checked_add(term)))
            })
    });

    let (height, width) = sums.dim();
    let values = sums
        .iter()
        .copied()
        .collect::<Option<Vec<T>>>()
        .ok_or(ArrayOpError::Overflow { op: "weighted_channel_sum" })?;
    Ok(Array2::from_shape_vec((height, width), values)?)
}

/// Run boundaries are the positions where an element differs from its
/// successor; the last index always closes the final run.
pub fn run_length_encode<T: Scalar>(x: &Array1<T>) -> Result<RunLengthEncoding<T>, ArrayOpError> {
    require_nonempty("run_length_encode", x)?;

    let view = x.view();
    let n = view.len();
    let changes = Zip::from(&view.slice(s![..-1]))
        .and(&view.slice(s![1..]))
        .map_collect(|a, b| a != b);

    let ends: Vec<usize> = changes
        .indexed_iter()
        .filter(|(_, &changed)| changed)
        .map(|(i, _)| i)
        .chain(iter::once(n - 1))
        .collect();

    let values = view.select(Axis(0), &ends);
    let counts = ends
        .iter()
        .scan(None, |prev: &mut Option<usize>, &end| {
            let count = match *prev {
                Some(p) => end - p,
                None => end + 1,
            };
            *prev = Some(end);
            Some(count)
        })
        .collect::<Vec<usize>>();

    Ok(RunLengthEncoding::from_runs(values.to_vec(), counts))
}

/// Broadcast `x` as (N, 1, K) against `y` as (1, M, K), square, and sum
/// over the coordinate axis.
pub fn pairwise_euclidean_distance<T: Scalar>(
    x: &Array2<T>,
    y: &Array2<T>,
) -> Result<Array2<f64>, ArrayOpError> {
    require_point_dims("pairwise_euclidean_distance", x, y)?;

    let xs = x.view().mapv(to_f64);
    let ys = y.view().mapv(to_f64);
    let diff = &xs.view().insert_axis(Axis(1)) - &ys.view().insert_axis(Axis(0));
    let dist = diff
        .mapv(|d| d * d)
        .sum_axis(Axis(2))
        .mapv(f64::sqrt);
    Ok(Array2::from(dist))
}
