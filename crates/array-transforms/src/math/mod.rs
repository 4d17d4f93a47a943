//! Small shape-tagged containers used throughout the crate.
//!
//! Provides `Array1` (1D), `Array2` (2D) and `Array3` (3D) row-major
//! containers whose constructors reject buffers that do not match the
//! requested shape. Each can be borrowed as an `ndarray` view for the
//! vectorized kernels.
pub mod matrix;
pub mod tensor;
pub mod vector;

use std::fmt::Debug;

use num_traits::{AsPrimitive, Num};

pub use matrix::{Array2, ShapeError};
pub use tensor::Array3;
pub use vector::Array1;

/// Element type accepted by every kernel: primitive integers and floats.
pub trait Scalar:
    Copy + PartialOrd + Num + AsPrimitive<f64> + CheckedArith + Debug + Send + Sync + 'static
{
}

impl<T> Scalar for T where
    T: Copy + PartialOrd + Num + AsPrimitive<f64> + CheckedArith + Debug + Send + Sync + 'static
{
}

/// Multiply and add that report integer overflow as `None`.
///
/// Floats never overflow here; they saturate to infinity as usual.
pub trait CheckedArith: Sized {
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_int {
    ($($t:ty)*) => {$(
        impl CheckedArith for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                <$t>::checked_add(self, rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                <$t>::checked_mul(self, rhs)
            }
        }
    )*};
}

macro_rules! unchecked_float {
    ($($t:ty)*) => {$(
        impl CheckedArith for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Option<Self> {
                Some(self + rhs)
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Option<Self> {
                Some(self * rhs)
            }
        }
    )*};
}

checked_int!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
unchecked_float!(f32 f64);
