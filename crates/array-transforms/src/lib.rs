//! array-transforms: small numeric array kernels in two flavours.
//!
//! The crate provides six independent, pure kernels (diagonal product,
//! multiset equality, max-after-zero, weighted channel sum, run-length
//! encoding and pairwise Euclidean distance). Each is implemented twice: a
//! naive element-by-element form and a vectorized form built on `ndarray`
//! views. The naive forms are re-exported at the crate root; the backends
//! can also be selected at runtime through [`kernels::factory::build_kernels`].
//!
//! Inputs are the shape-checked containers in [`math`]. Malformed input is
//! rejected with an [`ArrayOpError`] before any computation happens.
pub mod config;
pub mod encoding;
pub mod error;
pub mod kernels;
pub mod math;

pub use config::{Backend, DiagonalPolicy, KernelConfig};
pub use encoding::RunLengthEncoding;
pub use error::ArrayOpError;
pub use kernels::naive::{
    diagonal_product, diagonal_product_with, max_after_zero, multisets_equal,
    pairwise_euclidean_distance, run_length_encode, weighted_channel_sum,
};
pub use kernels::ArrayKernels;
pub use math::{Array1, Array2, Array3, Scalar};
