//! Integration tests for kernel configuration and the backend factory.

use array_transforms::config::{Backend, DiagonalPolicy, KernelConfig};
use array_transforms::kernels::factory::build_kernels;

// ---------------------------------------------------------------------------
// Backend / DiagonalPolicy parsing
// ---------------------------------------------------------------------------

#[test]
fn backend_default_is_naive() {
    assert_eq!(Backend::default(), Backend::Naive);
}

#[test]
fn backend_from_str() {
    assert_eq!("naive".parse::<Backend>().unwrap(), Backend::Naive);
    assert_eq!("Vectorized".parse::<Backend>().unwrap(), Backend::Vectorized);
    assert_eq!("ndarray".parse::<Backend>().unwrap(), Backend::Vectorized);
}

#[test]
fn backend_from_str_unknown_errors() {
    let result: Result<Backend, _> = "gpu".parse();
    let err = result.unwrap_err();
    assert!(err.contains("gpu"));
}

#[test]
fn diagonal_policy_from_str() {
    assert_eq!(
        "non-zero".parse::<DiagonalPolicy>().unwrap(),
        DiagonalPolicy::NonZero
    );
    assert_eq!(
        "positive_only".parse::<DiagonalPolicy>().unwrap(),
        DiagonalPolicy::PositiveOnly
    );
    assert!("odd".parse::<DiagonalPolicy>().is_err());
}

#[test]
fn diagonal_policy_keeps() {
    assert!(DiagonalPolicy::NonZero.keeps(-1));
    assert!(!DiagonalPolicy::NonZero.keeps(0));
    assert!(!DiagonalPolicy::PositiveOnly.keeps(-1.0));
    assert!(DiagonalPolicy::PositiveOnly.keeps(0.5));
}

// ---------------------------------------------------------------------------
// KernelConfig serde
// ---------------------------------------------------------------------------

#[test]
fn kernel_config_default_values() {
    let cfg = KernelConfig::default();
    assert_eq!(cfg.backend, Backend::Naive);
    assert_eq!(cfg.diagonal_policy, DiagonalPolicy::NonZero);
}

#[test]
fn kernel_config_serializes_to_json() {
    let cfg = KernelConfig::new(Backend::Vectorized, DiagonalPolicy::PositiveOnly);
    let json = serde_json::to_string(&cfg).unwrap();
    assert!(json.contains("\"backend\":\"vectorized\""));
    assert!(json.contains("\"diagonal_policy\":\"positive_only\""));
}

#[test]
fn kernel_config_round_trips_json() {
    let cfg = KernelConfig::new(Backend::Vectorized, DiagonalPolicy::NonZero);
    let json = serde_json::to_string(&cfg).unwrap();
    let cfg2: KernelConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(cfg, cfg2);
}

#[test]
fn kernel_config_fills_missing_fields_with_defaults() {
    let cfg: KernelConfig = serde_json::from_str(r#"{"backend": "vectorized"}"#).unwrap();
    assert_eq!(cfg.backend, Backend::Vectorized);
    assert_eq!(cfg.diagonal_policy, DiagonalPolicy::NonZero);
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

#[test]
fn factory_builds_requested_backend() {
    let naive = build_kernels::<f64>(&KernelConfig::new(Backend::Naive, DiagonalPolicy::NonZero));
    let vectorized =
        build_kernels::<f64>(&KernelConfig::new(Backend::Vectorized, DiagonalPolicy::NonZero));
    assert_eq!(naive.name(), "naive");
    assert_eq!(vectorized.name(), "vectorized");
}
