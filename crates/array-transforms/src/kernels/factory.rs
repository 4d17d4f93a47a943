use crate::config::{Backend, KernelConfig};
use crate::kernels::kernel_trait::ArrayKernels;
use crate::kernels::naive::NaiveKernels;
use crate::kernels::vectorized::VectorizedKernels;
use crate::math::Scalar;

/// Build a boxed kernel backend from a `KernelConfig`.
pub fn build_kernels<T: Scalar>(config: &KernelConfig) -> Box<dyn ArrayKernels<T>> {
    log::debug!(
        "Building {} kernels with diagonal policy {:?}",
        config.backend,
        config.diagonal_policy
    );
    match config.backend {
        Backend::Naive => Box::new(NaiveKernels::new(config.diagonal_policy)),
        Backend::Vectorized => Box::new(VectorizedKernels::new(config.diagonal_policy)),
    }
}
