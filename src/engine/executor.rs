//! Fit orchestration.
//!
//! ## Purpose
//!
//! This module runs a validated fit end to end: bind the objective,
//! dispatch the configured search strategy, and assemble the final
//! [`FitResult`] with predictions, residuals, and optional diagnostics.
//!
//! ## Design notes
//!
//! * **Single pass**: One search, one prediction pass for the winner, one
//!   residual pass. No iteration beyond what the strategy itself performs.
//! * **Dispatch**: The two strategies are interchangeable behind the same
//!   closure-shaped objective; the executor only chooses which one to call.
//!
//! ## Invariants
//!
//! * The table is validated before any objective evaluation.
//! * The starting vector length is checked against the model before the
//!   simplex runs.
//!
//! ## Non-goals
//!
//! * This module does not validate builder parameters (done at `build()`).
//! * This module does not render output (see `output` and the presentation
//!   layer).

use num_traits::Float;

use crate::engine::output::{FitResult, StrategyUsed};
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::loss::Loss;
use crate::models::linear::LinearModel;
use crate::primitives::errors::FitError;
use crate::primitives::table::SampleTable;
use crate::search::random::RandomSearch;
use crate::search::simplex::SimplexSearch;
use crate::search::{ModelObjective, SearchOutcome};

// ============================================================================
// Configuration
// ============================================================================

/// The search strategy a fit will use.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy<T> {
    /// Uniform random search over a bounded box.
    Random(RandomSearch<T>),

    /// Downhill-simplex minimization from a starting vector.
    ///
    /// When `start` is `None`, the search starts from the zero vector.
    Simplex {
        /// Simplex configuration.
        search: SimplexSearch<T>,
        /// Optional starting parameter vector.
        start: Option<Vec<T>>,
    },
}

/// Fully-resolved configuration for one fit.
#[derive(Debug, Clone, PartialEq)]
pub struct FitConfig<T> {
    /// Loss reduction to minimize.
    pub loss: Loss,

    /// Search strategy.
    pub strategy: Strategy<T>,

    /// Whether to compute diagnostic statistics.
    pub return_diagnostics: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs one fit from a resolved configuration.
pub struct FitExecutor;

impl FitExecutor {
    /// Execute the fit against `table`.
    pub fn run<T: Float>(
        table: &SampleTable<T>,
        config: &FitConfig<T>,
    ) -> Result<FitResult<T>, FitError> {
        Validator::validate_table(table)?;

        let dims = LinearModel::param_count(table);
        let mut objective = ModelObjective::new(table, config.loss);

        let (outcome, strategy_used): (SearchOutcome<T>, StrategyUsed) = match &config.strategy {
            Strategy::Random(search) => {
                let outcome = search.minimize(dims, |p| objective.evaluate(p));
                (outcome, StrategyUsed::Random)
            }
            Strategy::Simplex { search, start } => {
                let start = match start {
                    Some(start) => {
                        Validator::validate_start_length(start.len(), dims)?;
                        start.clone()
                    }
                    None => vec![T::zero(); dims],
                };
                let outcome = search.minimize(&start, |p| objective.evaluate(p));
                (outcome, StrategyUsed::Simplex)
            }
        };

        // Final pass: predictions and residuals under the winning parameters.
        let mut predictions = Vec::with_capacity(table.rows());
        LinearModel::predict_into(table, &outcome.params, &mut predictions);

        let mut residuals = Vec::with_capacity(table.rows());
        Loss::residuals_into(table.response(), &predictions, &mut residuals);

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(
                table.response(),
                &predictions,
                &residuals,
            ))
        } else {
            None
        };

        Ok(FitResult {
            loss: config.loss,
            strategy: strategy_used,
            params: outcome.params,
            param_labels: LinearModel::param_labels(table),
            loss_value: outcome.loss,
            predictions,
            residuals,
            actual: table.response().to_vec(),
            evaluations: outcome.evaluations,
            converged: outcome.converged,
            diagnostics,
        })
    }
}
