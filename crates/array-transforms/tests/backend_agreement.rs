//! Randomised checks that the naive and vectorized backends agree.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use array_transforms::config::DiagonalPolicy;
use array_transforms::kernels::{naive, vectorized};
use array_transforms::math::{Array1, Array2, Array3};

const TRIALS: usize = 200;

fn random_vector(rng: &mut StdRng, max_len: usize) -> Array1<i32> {
    let len = rng.gen_range(1..=max_len);
    // Small value range so zeros and repeated runs are common.
    (0..len).map(|_| rng.gen_range(-3..=3)).collect()
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Array2<f64> {
    let data = (0..rows * cols).map(|_| rng.gen_range(-10.0..10.0)).collect();
    Array2::from_shape_vec((rows, cols), data).unwrap()
}

// ---------------------------------------------------------------------------
// Agreement
// ---------------------------------------------------------------------------

#[test]
fn diagonal_product_agrees() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..TRIALS {
        let rows = rng.gen_range(0..6);
        let cols = rng.gen_range(0..6);
        let data = (0..rows * cols).map(|_| rng.gen_range(-3i64..=3)).collect();
        let m = Array2::from_shape_vec((rows, cols), data).unwrap();
        for policy in [DiagonalPolicy::NonZero, DiagonalPolicy::PositiveOnly] {
            assert_eq!(
                naive::diagonal_product_with(&m, policy).unwrap(),
                vectorized::diagonal_product_with(&m, policy).unwrap(),
                "matrix {:?}",
                m
            );
        }
    }
}

#[test]
fn multisets_equal_agrees_and_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..TRIALS {
        let x = random_vector(&mut rng, 8);
        let y = if rng.gen_bool(0.5) {
            // Reverse of x: always the same multiset.
            x.iter().rev().copied().collect()
        } else {
            random_vector(&mut rng, 8)
        };
        let expected = naive::multisets_equal(&x, &y).unwrap();
        assert_eq!(vectorized::multisets_equal(&x, &y).unwrap(), expected);
        assert_eq!(naive::multisets_equal(&y, &x).unwrap(), expected);
        assert!(naive::multisets_equal(&x, &x).unwrap());
    }
}

#[test]
fn max_after_zero_agrees() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..TRIALS {
        let x = random_vector(&mut rng, 12);
        assert_eq!(
            naive::max_after_zero(&x).unwrap(),
            vectorized::max_after_zero(&x).unwrap(),
            "input {}",
            x
        );
    }
}

#[test]
fn weighted_channel_sum_agrees() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..TRIALS {
        let h = rng.gen_range(0..5);
        let w = rng.gen_range(0..5);
        let data = (0..h * w * 3).map(|_| rng.gen_range(0.0..255.0)).collect();
        let image = Array3::from_shape_vec((h, w, 3), data).unwrap();
        let coefs: Array1<f64> = (0..3).map(|_| rng.gen_range(-1.0..1.0)).collect();

        let a = naive::weighted_channel_sum(&image, &coefs).unwrap();
        let b = vectorized::weighted_channel_sum(&image, &coefs).unwrap();
        assert_eq!(a.shape(), b.shape());
        for (u, v) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((u - v).abs() < 1e-9);
        }
    }
}

#[test]
fn run_length_encode_agrees_and_round_trips() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..TRIALS {
        let x = random_vector(&mut rng, 16);
        let a = naive::run_length_encode(&x).unwrap();
        let b = vectorized::run_length_encode(&x).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_len(), x.len());
        assert_eq!(a.decode(), x);
        // Adjacent runs never share a value.
        for pair in a.values.as_slice().windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}

#[test]
fn pairwise_distance_agrees() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..TRIALS {
        let n = rng.gen_range(0..5);
        let m = rng.gen_range(0..5);
        let k = rng.gen_range(1..4);
        let x = random_matrix(&mut rng, n, k);
        let y = random_matrix(&mut rng, m, k);

        let a = naive::pairwise_euclidean_distance(&x, &y).unwrap();
        let b = vectorized::pairwise_euclidean_distance(&x, &y).unwrap();
        assert_eq!(a.shape(), (n, m));
        assert_eq!(b.shape(), (n, m));
        for (u, v) in a.as_slice().iter().zip(b.as_slice()) {
            assert!(*u >= 0.0);
            assert!((u - v).abs() < 1e-9);
        }
    }
}
