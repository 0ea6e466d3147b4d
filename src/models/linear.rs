//! Linear candidate models over sample tables.
//!
//! ## Purpose
//!
//! This module defines how a parameter vector is interpreted against a
//! [`SampleTable`]: each row's prediction is a fixed linear combination of
//! the parameters with the row's predictor values.
//!
//! ## Design notes
//!
//! * **Parameter ordering**: intercept first, then one coefficient per
//!   continuous column, then one offset per non-baseline level of each
//!   categorical column, in column insertion order.
//! * **Baseline coding**: the first level of a categorical column
//!   contributes zero, so the intercept absorbs the baseline mean.
//! * **Buffer reuse**: `predict_into` refills a caller-owned vector so the
//!   search loop allocates nothing per evaluation.
//!
//! ## Invariants
//!
//! * `param_count` equals 1 plus the sum of all column widths.
//! * Predictions are deterministic functions of (table, parameters).
//!
//! ## Non-goals
//!
//! * This module does not score predictions (see the math layer).
//! * This module does not support interactions or polynomial terms.

use num_traits::Float;

use crate::primitives::table::{ColumnValues, SampleTable};

// ============================================================================
// Linear Model
// ============================================================================

/// The linear model family: prediction = intercept + Σ term(column).
#[derive(Debug, Clone, Copy)]
pub struct LinearModel;

impl LinearModel {
    /// Number of parameters a table requires.
    pub fn param_count<T: Float>(table: &SampleTable<T>) -> usize {
        1 + table
            .predictors()
            .iter()
            .map(|column| column.values().width())
            .sum::<usize>()
    }

    /// Human-readable labels for each parameter position.
    ///
    /// Continuous columns use their own name; categorical offsets are
    /// labeled `name[level]` for each non-baseline level.
    pub fn param_labels<T: Float>(table: &SampleTable<T>) -> Vec<String> {
        let mut labels = Vec::with_capacity(Self::param_count(table));
        labels.push("intercept".to_string());

        for column in table.predictors() {
            match column.values() {
                ColumnValues::Continuous(_) => {
                    labels.push(column.name().to_string());
                }
                ColumnValues::Categorical { levels, .. } => {
                    for level in levels.iter().skip(1) {
                        labels.push(format!("{}[{}]", column.name(), level));
                    }
                }
            }
        }

        labels
    }

    /// Predict a single row.
    ///
    /// # Preconditions
    ///
    /// `params.len()` equals [`param_count`](Self::param_count) and `row`
    /// is in range.
    pub fn predict_row<T: Float>(table: &SampleTable<T>, row: usize, params: &[T]) -> T {
        debug_assert_eq!(params.len(), Self::param_count(table));

        let mut acc = params[0];
        let mut k = 1;

        for column in table.predictors() {
            match column.values() {
                ColumnValues::Continuous(values) => {
                    acc = acc + params[k] * values[row];
                    k += 1;
                }
                ColumnValues::Categorical { levels, codes } => {
                    let code = codes[row];
                    if code > 0 {
                        acc = acc + params[k + code - 1];
                    }
                    k += levels.len().saturating_sub(1);
                }
            }
        }

        acc
    }

    /// Predict every row into `out`, reusing its capacity.
    pub fn predict_into<T: Float>(table: &SampleTable<T>, params: &[T], out: &mut Vec<T>) {
        out.clear();
        for row in 0..table.rows() {
            out.push(Self::predict_row(table, row, params));
        }
    }
}
