//! Kernel backends.
//!
//! `naive` walks every element with explicit index loops; `vectorized`
//! expresses the same kernels as whole-array maps, zips, and axis
//! reductions over `ndarray` views. Both share the boundary checks in
//! `validate` so they fail identically on malformed input.
pub mod factory;
pub mod kernel_trait;
pub mod naive;
pub mod validate;
pub mod vectorized;

pub use kernel_trait::ArrayKernels;
pub use naive::NaiveKernels;
pub use vectorized::VectorizedKernels;
