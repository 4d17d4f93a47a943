use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Central configuration for building a kernel backend.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KernelConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default)]
    pub diagonal_policy: DiagonalPolicy,
}

/// Which implementation of the kernel set to run.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Explicit element-by-element loops.
    #[default]
    Naive,
    /// Whole-array operations over `ndarray` views.
    Vectorized,
}

/// Which diagonal entries contribute to `diagonal_product`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiagonalPolicy {
    /// Skip exact zeros, keep everything else including negatives.
    #[default]
    NonZero,
    /// Keep only strictly positive entries.
    PositiveOnly,
}

impl DiagonalPolicy {
    /// Whether `value` takes part in the product under this policy.
    pub fn keeps<T>(self, value: T) -> bool
    where
        T: PartialOrd + num_traits::Zero,
    {
        match self {
            DiagonalPolicy::NonZero => !value.is_zero(),
            DiagonalPolicy::PositiveOnly => value > T::zero(),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" | "loop" => Ok(Backend::Naive),
            "vectorized" | "vectorised" | "ndarray" => Ok(Backend::Vectorized),
            _ => Err(format!(
                "Unknown backend: {}. Expected one of: naive, vectorized",
                s
            )),
        }
    }
}

impl FromStr for DiagonalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "nonzero" | "non_zero" => Ok(DiagonalPolicy::NonZero),
            "positive" | "positive_only" => Ok(DiagonalPolicy::PositiveOnly),
            _ => Err(format!(
                "Unknown diagonal policy: {}. Expected one of: non_zero, positive_only",
                s
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Naive => write!(f, "naive"),
            Backend::Vectorized => write!(f, "vectorized"),
        }
    }
}

impl KernelConfig {
    pub fn new(backend: Backend, diagonal_policy: DiagonalPolicy) -> Self {
        Self {
            backend,
            diagonal_policy,
        }
    }
}
