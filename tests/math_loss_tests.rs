//! Tests for the scalar loss reductions.

use approx::assert_relative_eq;
use modelfit_rs::prelude::*;

// ============================================================================
// RMSE
// ============================================================================

#[test]
fn test_rmse_known_value() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![1.0, 2.0, 5.0];

    // Squared errors: 0, 0, 4. Mean: 4/3. RMSE: sqrt(4/3).
    let loss = Rmse.measure(&actual, &predicted);
    assert_relative_eq!(loss, (4.0f64 / 3.0).sqrt(), epsilon = 1e-12);
}

#[test]
fn test_rmse_zero_iff_exact_match() {
    let actual = vec![1.5, -2.0, 0.25, 7.0];

    let loss = Rmse.measure(&actual, &actual);
    assert_eq!(loss, 0.0);

    // Perturb a single element: the loss must become strictly positive.
    let mut predicted = actual.clone();
    predicted[2] += 1e-6;
    assert!(Rmse.measure(&actual, &predicted) > 0.0);
}

#[test]
fn test_rmse_non_negative() {
    let actual = vec![-3.0, -1.0, 2.0, 8.0, -5.5];
    let predicted = vec![4.0, -2.0, 2.5, -8.0, 0.0];

    assert!(Rmse.measure(&actual, &predicted) >= 0.0);
    assert!(Mae.measure(&actual, &predicted) >= 0.0);
}

// ============================================================================
// MAE
// ============================================================================

#[test]
fn test_mae_known_value() {
    let actual = vec![1.0, 2.0, 3.0, 4.0];
    let predicted = vec![2.0, 2.0, 1.0, 8.0];

    // Absolute errors: 1, 0, 2, 4. Mean: 7/4.
    let loss = Mae.measure(&actual, &predicted);
    assert_relative_eq!(loss, 1.75, epsilon = 1e-12);
}

#[test]
fn test_rmse_dominates_mae() {
    // Quadratic mean >= arithmetic mean of absolute values, for any errors.
    let cases: Vec<(Vec<f64>, Vec<f64>)> = vec![
        (vec![1.0, 2.0, 3.0], vec![1.1, 1.9, 3.3]),
        (vec![0.0, 0.0, 0.0], vec![5.0, -5.0, 5.0]),
        (vec![-1.0, 4.0, 2.5, 0.0], vec![0.0, 0.0, 0.0, 0.0]),
        (vec![10.0], vec![-3.0]),
    ];

    for (actual, predicted) in cases {
        let rmse = Rmse.measure(&actual, &predicted);
        let mae = Mae.measure(&actual, &predicted);
        assert!(
            rmse >= mae - 1e-12,
            "RMSE {} must dominate MAE {}",
            rmse,
            mae
        );
    }
}

#[test]
fn test_loss_equality_on_uniform_errors() {
    // When every error has the same magnitude, the two reductions agree.
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![3.0, 4.0, 5.0];

    let rmse = Rmse.measure(&actual, &predicted);
    let mae = Mae.measure(&actual, &predicted);
    assert_relative_eq!(rmse, mae, epsilon = 1e-12);
    assert_relative_eq!(rmse, 2.0, epsilon = 1e-12);
}

// ============================================================================
// Residuals and Naming
// ============================================================================

#[test]
fn test_residuals_into_reuses_buffer() {
    let actual = vec![1.0, 2.0, 3.0];
    let predicted = vec![0.5, 2.0, 4.0];

    let mut out = vec![99.0; 7];
    Loss::residuals_into(&actual, &predicted, &mut out);

    assert_eq!(out, vec![0.5, 0.0, -1.0]);
}

#[test]
fn test_loss_names() {
    assert_eq!(Rmse.name(), "RMSE");
    assert_eq!(Mae.name(), "MAE");
    assert_eq!(Loss::default(), Rmse);
}
