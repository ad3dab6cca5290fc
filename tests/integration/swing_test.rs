//! Integration tests for swing detection and momentum accuracy

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swing_momentum::swing::{
    analyze_swings, detect_pivots, momentum_accuracy, MomentumAccuracy, SwingConfig,
    SwingEstimator,
};

fn series(values: &[i64]) -> Vec<Decimal> {
    values.iter().map(|&v| Decimal::from(v)).collect()
}

/// Deterministic penny-tick random walk
fn random_walk(seed: u64, n: usize) -> Vec<Decimal> {
    let mut state = seed;
    let mut cents: i64 = 20_000;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        let step = ((state >> 33) % 7) as i64 - 3;
        cents += if step == 0 { 1 } else { step };
        out.push(Decimal::new(cents, 2));
    }
    out
}

#[test]
fn test_sawtooth_case() {
    let prices = series(&[0, 10, 0, 10, 0, 10]);

    let pivots = detect_pivots(&prices, dec!(5)).unwrap();
    assert_eq!(pivots.indices(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(pivots.differences(&prices), series(&[10, -10, 10, -10, 10]));

    let acc = momentum_accuracy(&prices, dec!(5)).unwrap();
    assert_eq!(acc.ratio(), Some(Decimal::ZERO));
}

#[test]
fn test_pure_trend_case() {
    let prices = series(&[0, 6, 12, 18, 24]);

    let pivots = detect_pivots(&prices, dec!(5)).unwrap();
    assert_eq!(pivots.indices(), &[0, 1, 2, 3, 4]);
    assert_eq!(pivots.differences(&prices), series(&[6, 6, 6, 6]));

    let acc = momentum_accuracy(&prices, dec!(5)).unwrap();
    assert_eq!(acc.ratio(), Some(Decimal::ONE));
}

#[test]
fn test_insufficiency_detection() {
    let prices = series(&[1, 2, 3, 4, 5]);

    let pivots = detect_pivots(&prices, dec!(100)).unwrap();
    assert!(pivots.is_empty() || pivots.len() == 2);

    let acc = momentum_accuracy(&prices, dec!(100)).unwrap();
    assert!(!acc.is_measured());
    assert_eq!(acc.ratio(), None);
}

#[test]
fn test_minimal_data_case() {
    let prices = series(&[100, 110]);

    let analysis = analyze_swings(&prices, dec!(5)).unwrap();
    assert_eq!(analysis.pivots.len(), 2);
    assert_eq!(analysis.pivots.differences(&prices).len(), 1);
    assert_eq!(
        analysis.accuracy,
        MomentumAccuracy::InsufficientData { pivots: 2 }
    );
}

#[test]
fn test_determinism() {
    let prices = random_walk(7, 2_000);
    let estimator = SwingEstimator::new(SwingConfig {
        threshold: dec!(0.05),
    });

    let first = estimator.analyze(&prices).unwrap();
    for _ in 0..3 {
        assert_eq!(estimator.analyze(&prices).unwrap(), first);
    }
}

#[test]
fn test_pivots_strictly_increasing_and_in_bounds() {
    for seed in 0..20 {
        let prices = random_walk(seed, 500);
        for threshold in [dec!(0.01), dec!(0.03), dec!(0.05), dec!(0.10), dec!(1.00)] {
            let pivots = detect_pivots(&prices, threshold).unwrap();
            let idx = pivots.indices();

            assert!(idx.windows(2).all(|w| w[0] < w[1]));
            assert!(idx.iter().all(|&i| i < prices.len()));
            assert_ne!(pivots.len(), 1);
        }
    }
}

#[test]
fn test_consecutive_pivots_are_threshold_apart() {
    for seed in 0..10 {
        let prices = random_walk(seed, 500);
        let threshold = dec!(0.05);
        let pivots = detect_pivots(&prices, threshold).unwrap();

        for diff in pivots.differences(&prices) {
            assert!(diff.abs() >= threshold);
        }
    }
}

#[test]
fn test_accuracy_bounds() {
    for seed in 0..20 {
        let prices = random_walk(seed, 1_000);
        for threshold in [dec!(0.02), dec!(0.05), dec!(0.20)] {
            if let Some(ratio) = momentum_accuracy(&prices, threshold).unwrap().ratio() {
                assert!(ratio >= Decimal::ZERO);
                assert!(ratio <= Decimal::ONE);
            }
        }
    }
}

#[test]
fn test_threshold_sensitivity_on_wave() {
    let prices = series(&[10, 12, 11, 15, 14, 20, 13, 12, 18, 17, 25, 19, 16, 22, 21, 28]);

    let counts: Vec<usize> = [1, 2, 3, 4, 5, 6, 8, 10, 20]
        .iter()
        .map(|&t| detect_pivots(&prices, Decimal::from(t)).unwrap().len())
        .collect();

    assert_eq!(counts, vec![16, 11, 10, 8, 8, 6, 6, 2, 0]);
    assert!(counts.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn test_threshold_sensitivity_on_trend_and_sawtooth() {
    for values in [&[0, 6, 12, 18, 24][..], &[0, 10, 0, 10, 0, 10][..]] {
        let prices = series(values);
        let counts: Vec<usize> = (1..=12)
            .map(|t| detect_pivots(&prices, Decimal::from(t)).unwrap().len())
            .collect();
        assert!(counts.windows(2).all(|w| w[1] <= w[0]));
    }
}

#[test]
fn test_estimator_shared_across_threads() {
    let estimator = SwingEstimator::new(SwingConfig {
        threshold: dec!(0.05),
    });

    let handles: Vec<_> = (0..4)
        .map(|seed| {
            let estimator = estimator.clone();
            std::thread::spawn(move || {
                let prices = random_walk(seed, 1_000);
                (estimator.analyze(&prices).unwrap(), prices)
            })
        })
        .collect();

    for handle in handles {
        let (analysis, prices) = handle.join().unwrap();
        assert_eq!(analysis, estimator.analyze(&prices).unwrap());
    }
}
