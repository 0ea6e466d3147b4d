//! Fit results and their textual rendering.
//!
//! ## Purpose
//!
//! This module defines [`FitResult`], the complete record of one fit: the
//! winning parameter vector, its loss, per-row predictions and residuals,
//! and optional diagnostics, plus a formatted `Display` rendering.
//!
//! ## Design notes
//!
//! * **Self-contained**: The result owns everything needed to inspect or
//!   render the fit; the table itself is not retained.
//! * **Truncated rendering**: The per-row table shows at most a handful of
//!   rows and summarizes the remainder.
//!
//! ## Invariants
//!
//! * `predictions`, `residuals`, and the fitted table have the same length.
//! * `param_labels` and `params` have the same length.
//!
//! ## Non-goals
//!
//! * This module does not serialize results to external formats.
//! * This module does not render graphical plots (see the presentation
//!   layer).

use std::fmt;

use num_traits::Float;

use crate::evaluation::diagnostics::Diagnostics;
use crate::math::loss::Loss;

// ============================================================================
// Strategy Tag
// ============================================================================

/// Which search strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyUsed {
    /// Uniform random search.
    Random,

    /// Downhill-simplex minimization.
    Simplex,
}

impl StrategyUsed {
    /// Human-readable strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random search",
            Self::Simplex => "downhill simplex",
        }
    }
}

// ============================================================================
// Fit Result
// ============================================================================

/// Maximum number of rows printed before the table is summarized.
const DISPLAY_ROWS: usize = 10;

/// The complete record of one fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult<T> {
    /// The loss reduction that was minimized.
    pub loss: Loss,

    /// The strategy that produced the parameters.
    pub strategy: StrategyUsed,

    /// The winning parameter vector.
    pub params: Vec<T>,

    /// Label for each parameter position (intercept, column names, levels).
    pub param_labels: Vec<String>,

    /// The loss of the winning parameter vector.
    pub loss_value: T,

    /// Per-row predictions under the winning parameters.
    pub predictions: Vec<T>,

    /// Per-row residuals (actual - predicted).
    pub residuals: Vec<T>,

    /// Actual response values, row for row.
    pub actual: Vec<T>,

    /// Number of objective evaluations the search performed.
    pub evaluations: usize,

    /// Whether the strategy's termination criterion was met.
    pub converged: bool,

    /// Diagnostic statistics, when requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Float> fmt::Display for FitResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_f64 = |v: T| v.to_f64().unwrap_or(f64::NAN);

        writeln!(f, "Summary:")?;
        writeln!(f, "  Rows: {}", self.actual.len())?;
        writeln!(
            f,
            "  {}: {:.6}",
            self.loss.name(),
            as_f64(self.loss_value)
        )?;
        let convergence = if self.converged {
            "converged"
        } else {
            "no convergence criterion met"
        };
        writeln!(
            f,
            "  Strategy: {} ({} evaluations, {})",
            self.strategy.name(),
            self.evaluations,
            convergence
        )?;
        writeln!(f)?;

        writeln!(f, "Coefficients:")?;
        for (label, &value) in self.param_labels.iter().zip(self.params.iter()) {
            writeln!(f, "  {:<16} {:>12.5}", label, as_f64(value))?;
        }
        writeln!(f)?;

        if let Some(diag) = &self.diagnostics {
            writeln!(f, "Diagnostics:")?;
            writeln!(f, "  RMSE:         {:.6}", as_f64(diag.rmse))?;
            writeln!(f, "  MAE:          {:.6}", as_f64(diag.mae))?;
            writeln!(f, "  R^2:          {:.6}", as_f64(diag.r_squared))?;
            writeln!(f, "  Residual SD:  {:.6}", as_f64(diag.residual_sd))?;
            writeln!(f)?;
        }

        writeln!(f, "Fitted Data:")?;
        writeln!(
            f,
            "  {:>6} {:>12} {:>12} {:>12}",
            "Row", "Actual", "Predicted", "Residual"
        )?;
        writeln!(f, "  {}", "-".repeat(46))?;

        let shown = self.actual.len().min(DISPLAY_ROWS);
        for i in 0..shown {
            writeln!(
                f,
                "  {:>6} {:>12.5} {:>12.5} {:>12.5}",
                i,
                as_f64(self.actual[i]),
                as_f64(self.predictions[i]),
                as_f64(self.residuals[i])
            )?;
        }
        if self.actual.len() > shown {
            writeln!(f, "  ... ({} more rows)", self.actual.len() - shown)?;
        }

        Ok(())
    }
}
