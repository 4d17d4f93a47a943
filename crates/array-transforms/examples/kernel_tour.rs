//! Runs every kernel on a small fixed input with the backend named on the
//! command line (`naive` or `vectorized`).
//!
//! ```text
//! ARRAY_TRANSFORMS_LOG=debug cargo run --example kernel_tour -- vectorized
//! ```
use anyhow::{anyhow, Result};
use log::LevelFilter;

use array_transforms::config::{Backend, DiagonalPolicy, KernelConfig};
use array_transforms::kernels::factory::build_kernels;
use array_transforms::math::{Array1, Array2, Array3};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ARRAY_TRANSFORMS_LOG", "info"))
        .init();

    let backend = match std::env::args().nth(1) {
        Some(name) => name.parse::<Backend>().map_err(|e| anyhow!(e))?,
        None => Backend::default(),
    };
    let config = KernelConfig::new(backend, DiagonalPolicy::NonZero);
    let kernels = build_kernels::<f64>(&config);
    log::info!("Running kernel tour with the {} backend", kernels.name());

    let m = Array2::from_shape_vec((3, 3), vec![1.0, 0.0, 1.0, 2.0, 0.0, 2.0, 3.0, 0.0, 3.0])?;
    println!("diagonal_product: {}", kernels.diagonal_product(&m)?);

    let x = Array1::from_vec(vec![1.0, 2.0, 2.0, 3.0]);
    let y = Array1::from_vec(vec![3.0, 2.0, 1.0, 2.0]);
    println!("multisets_equal: {}", kernels.multisets_equal(&x, &y)?);

    let z = Array1::from_vec(vec![6.0, 2.0, 0.0, 3.0, 0.0, 0.0, 5.0, 7.0, 0.0]);
    println!("max_after_zero: {}", kernels.max_after_zero(&z)?);

    let image = Array3::from_elem((2, 2, 3), 1.0);
    let coefs = Array1::from_vec(vec![0.2, 0.3, 0.5]);
    let gray = kernels.weighted_channel_sum(&image, &coefs)?;
    println!("weighted_channel_sum: {:?}", gray.to_vec());

    let runs = Array1::from_vec(vec![2.0, 2.0, 2.0, 3.0, 3.0, 1.0, 1.0, 1.0, 1.0]);
    let rle = kernels.run_length_encode(&runs)?;
    println!("run_length_encode: values={} counts={}", rle.values, rle.counts);

    let a = Array2::from_shape_vec((1, 2), vec![0.0, 0.0])?;
    let b = Array2::from_shape_vec((2, 2), vec![3.0, 4.0, 6.0, 8.0])?;
    let d = kernels.pairwise_euclidean_distance(&a, &b)?;
    println!("pairwise_euclidean_distance: {:?}", d.to_vec());

    Ok(())
}
