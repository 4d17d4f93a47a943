use crate::encoding::RunLengthEncoding;
use crate::error::ArrayOpError;
use crate::math::{Array1, Array2, Array3, Scalar};

/// The six array kernels behind a single seam so callers can swap between
/// the naive and vectorized implementations at runtime.
///
/// Every method validates shapes before computing and never mutates its
/// inputs. Both implementations must return identical results for the
/// same input (up to floating point summation order).
pub trait ArrayKernels<T: Scalar> {
    /// Product of the main-diagonal entries selected by the diagonal policy.
    /// An empty diagonal yields one.
    fn diagonal_product(&self, matrix: &Array2<T>) -> Result<T, ArrayOpError>;

    /// Whether `x` and `y` hold the same values with the same multiplicities.
    fn multisets_equal(&self, x: &Array1<T>, y: &Array1<T>) -> Result<bool, ArrayOpError>;

    /// Largest value directly following a zero, or zero when there is none.
    fn max_after_zero(&self, x: &Array1<T>) -> Result<T, ArrayOpError>;

    /// Per-pixel dot product of the three channels with `coefs`.
    fn weighted_channel_sum(
        &self,
        image: &Array3<T>,
        coefs: &Array1<T>,
    ) -> Result<Array2<T>, ArrayOpError>;

    fn run_length_encode(&self, x: &Array1<T>) -> Result<RunLengthEncoding<T>, ArrayOpError>;

    /// N x M matrix of Euclidean distances between the rows of `x` and `y`.
    fn pairwise_euclidean_distance(
        &self,
        x: &Array2<T>,
        y: &Array2<T>,
    ) -> Result<Array2<f64>, ArrayOpError>;

    fn name(&self) -> &str {
        "kernels"
    }
}
