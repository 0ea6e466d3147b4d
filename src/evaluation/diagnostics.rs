//! Fit-quality diagnostics.
//!
//! ## Purpose
//!
//! This module summarizes how well a fitted parameter vector explains the
//! data: error magnitudes (RMSE, MAE), the coefficient of determination
//! (R²), and the residual standard deviation.
//!
//! ## Design notes
//!
//! * **Single pass per statistic**: Each quantity is a straightforward
//!   reduction over the rows; no intermediate allocations.
//! * **Degenerate data**: When the response is constant, R² is defined as 1
//!   for a perfect fit and 0 otherwise.
//!
//! ## Invariants
//!
//! * RMSE and MAE are non-negative.
//! * R² <= 1 for any fit.
//!
//! ## Non-goals
//!
//! * This module does not compute standard errors or intervals.
//! * This module does not decide whether a fit is acceptable.

use num_traits::Float;

use crate::math::loss::Loss;

// ============================================================================
// Diagnostics
// ============================================================================

/// Summary statistics for a completed fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Root-mean-square error of the predictions.
    pub rmse: T,

    /// Mean absolute error of the predictions.
    pub mae: T,

    /// Coefficient of determination.
    pub r_squared: T,

    /// Sample standard deviation of the residuals.
    pub residual_sd: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from actuals, predictions, and residuals.
    ///
    /// # Preconditions
    ///
    /// All three slices have equal, nonzero length, with
    /// `residuals[i] = actual[i] - predicted[i]`.
    pub fn compute(actual: &[T], predicted: &[T], residuals: &[T]) -> Self {
        debug_assert_eq!(actual.len(), predicted.len());
        debug_assert_eq!(actual.len(), residuals.len());

        let n = actual.len();
        let n_t = T::from(n).unwrap();

        let rmse = Loss::Rmse.measure(actual, predicted);
        let mae = Loss::Mae.measure(actual, predicted);

        let mean = actual.iter().fold(T::zero(), |acc, &y| acc + y) / n_t;

        let ss_res = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let ss_tot = actual.iter().fold(T::zero(), |acc, &y| {
            let d = y - mean;
            acc + d * d
        });

        let r_squared = if ss_tot > T::zero() {
            T::one() - ss_res / ss_tot
        } else if ss_res.is_zero() {
            T::one()
        } else {
            T::zero()
        };

        let residual_sd = if n > 1 {
            (ss_res / T::from(n - 1).unwrap()).sqrt()
        } else {
            T::zero()
        };

        Self {
            rmse,
            mae,
            r_squared,
            residual_sd,
        }
    }
}
