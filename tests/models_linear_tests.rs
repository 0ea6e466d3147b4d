#![cfg(feature = "dev")]
//! Tests for the linear model family: parameter ordering and prediction.

use approx::assert_relative_eq;
use modelfit_rs::internals::models::linear::LinearModel;
use modelfit_rs::prelude::*;

fn mixed_table() -> SampleTable<f64> {
    SampleTable::builder()
        .continuous("x", vec![1.0, 2.0, 3.0, 4.0])
        .categorical("group", &["a", "b", "a", "c"])
        .response(vec![0.0, 0.0, 0.0, 0.0])
        .build()
        .unwrap()
}

// ============================================================================
// Parameter Ordering
// ============================================================================

#[test]
fn test_param_count_continuous_only() {
    let table = SampleTable::builder()
        .continuous("x1", vec![1.0, 2.0])
        .continuous("x2", vec![3.0, 4.0])
        .response(vec![5.0, 6.0])
        .build()
        .unwrap();

    // Intercept plus one coefficient per column.
    assert_eq!(LinearModel::param_count(&table), 3);
}

#[test]
fn test_param_count_with_categorical() {
    // Intercept + x + two non-baseline levels (b, c).
    assert_eq!(LinearModel::param_count(&mixed_table()), 4);
}

#[test]
fn test_param_labels() {
    let labels = LinearModel::param_labels(&mixed_table());
    assert_eq!(labels, vec!["intercept", "x", "group[b]", "group[c]"]);
}

// ============================================================================
// Prediction
// ============================================================================

#[test]
fn test_predict_row_continuous() {
    let table = SampleTable::builder()
        .continuous("x", vec![1.0, 2.0, 3.0])
        .response(vec![0.0, 0.0, 0.0])
        .build()
        .unwrap();

    let params = [1.0, 2.0];
    assert_relative_eq!(LinearModel::predict_row(&table, 0, &params), 3.0);
    assert_relative_eq!(LinearModel::predict_row(&table, 2, &params), 7.0);
}

#[test]
fn test_predict_row_baseline_coding() {
    let table = mixed_table();
    // intercept 10, x coefficient 1, group[b] 100, group[c] 1000.
    let params = [10.0, 1.0, 100.0, 1000.0];

    // Row 0: group a (baseline) contributes nothing.
    assert_relative_eq!(LinearModel::predict_row(&table, 0, &params), 11.0);
    // Row 1: group b.
    assert_relative_eq!(LinearModel::predict_row(&table, 1, &params), 112.0);
    // Row 3: group c.
    assert_relative_eq!(LinearModel::predict_row(&table, 3, &params), 1014.0);
}

#[test]
fn test_predict_into_refills_buffer() {
    let table = mixed_table();
    let params = [0.0, 1.0, 0.0, 0.0];

    let mut out = vec![42.0; 10];
    LinearModel::predict_into(&table, &params, &mut out);

    // Pure x passthrough under these parameters.
    assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
}
