//! High-level API for fitting candidate models.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements
//! a fluent builder for configuring the loss, the search strategy, and the
//! search parameters, then validates everything at `build()`.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked once, when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `ModelFit::new()` → chained setters →
//!   `.build()` → [`Fitter::fit`] against a [`SampleTable`].
//! * **Strategies**: `.random(samples)` for bounded uniform search,
//!   `.simplex()` for derivative-free local minimization. Setting both is a
//!   configuration error.

use num_traits::Float;

use crate::engine::executor::{FitConfig, FitExecutor, Strategy};
use crate::engine::validator::Validator;
use crate::search::random::RandomSearch;
use crate::search::simplex::SimplexSearch;

// Publicly re-exported types
pub use crate::engine::output::{FitResult, StrategyUsed};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::loss::Loss;
pub use crate::primitives::errors::FitError;
pub use crate::primitives::table::{
    ColumnValues, PredictorColumn, SampleTable, SampleTableBuilder,
};
pub use crate::search::SearchOutcome;

// ============================================================================
// Defaults
// ============================================================================

/// Default number of random-search samples.
const DEFAULT_SAMPLES: usize = 10_000;

/// Default search box, applied per coordinate.
const DEFAULT_LOWER: f64 = -10.0;

/// Default search box, applied per coordinate.
const DEFAULT_UPPER: f64 = 10.0;

/// Default random seed.
const DEFAULT_SEED: u64 = 0;

/// Default simplex iteration cap.
const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Default simplex convergence tolerance.
const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Default initial simplex step.
const DEFAULT_STEP: f64 = 0.5;

// ============================================================================
// Builder
// ============================================================================

/// Which strategy the builder was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StrategyChoice {
    Random,
    Simplex,
}

/// Fluent builder for configuring a fit.
#[derive(Debug, Clone)]
pub struct ModelFit<T: Float> {
    /// Loss reduction to minimize.
    pub loss: Option<Loss>,

    /// Number of random-search samples.
    pub samples: Option<usize>,

    /// Search box bounds, applied per coordinate.
    pub bounds: Option<(T, T)>,

    /// Seed for the random number generator.
    pub seed: Option<u64>,

    /// Starting parameter vector for the simplex.
    pub start: Option<Vec<T>>,

    /// Simplex iteration cap.
    pub max_iterations: Option<usize>,

    /// Simplex convergence tolerance.
    pub tolerance: Option<T>,

    /// Initial simplex step.
    pub step: Option<T>,

    /// Enable diagnostic statistics in the result.
    pub return_diagnostics: Option<bool>,

    strategy: Option<StrategyChoice>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ModelFit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ModelFit<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            loss: None,
            samples: None,
            bounds: None,
            seed: None,
            start: None,
            max_iterations: None,
            tolerance: None,
            step: None,
            return_diagnostics: None,
            strategy: None,
            duplicate_param: None,
        }
    }

    /// Set the loss reduction to minimize (default: RMSE).
    pub fn loss(mut self, loss: Loss) -> Self {
        if self.loss.is_some() {
            self.duplicate_param = Some("loss");
        }
        self.loss = Some(loss);
        self
    }

    /// Use random search with the given number of samples.
    pub fn random(mut self, samples: usize) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(StrategyChoice::Random);
        self.samples = Some(samples);
        self
    }

    /// Use downhill-simplex minimization.
    ///
    /// The simplex is a local method: it terminates at a local optimum, is
    /// sensitive to the starting point, and becomes less reliable as the
    /// parameter count grows. Pair it with [`start`](Self::start) to choose
    /// where it begins.
    pub fn simplex(mut self) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(StrategyChoice::Simplex);
        self
    }

    /// Set the per-coordinate search box for random search
    /// (default: [-10, 10]).
    pub fn bounds(mut self, lower: T, upper: T) -> Self {
        if self.bounds.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.bounds = Some((lower, upper));
        self
    }

    /// Set the random seed (default: 0). A fixed seed makes random search
    /// fully deterministic.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the simplex starting vector (default: all zeros).
    ///
    /// The length must match the table's parameter count at fit time.
    pub fn start(mut self, start: Vec<T>) -> Self {
        if self.start.is_some() {
            self.duplicate_param = Some("start");
        }
        self.start = Some(start);
        self
    }

    /// Set the simplex iteration cap (default: 500).
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if self.max_iterations.is_some() {
            self.duplicate_param = Some("max_iterations");
        }
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the simplex convergence tolerance (default: 1e-8).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        if self.tolerance.is_some() {
            self.duplicate_param = Some("tolerance");
        }
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the initial simplex step (default: 0.5).
    pub fn step(mut self, step: T) -> Self {
        if self.step.is_some() {
            self.duplicate_param = Some("step");
        }
        self.step = Some(step);
        self
    }

    /// Include diagnostic statistics (RMSE, MAE, R², residual SD) in the
    /// result.
    pub fn return_diagnostics(mut self) -> Self {
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and produce a [`Fitter`].
    pub fn build(self) -> Result<Fitter<T>, FitError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let loss = self.loss.unwrap_or_default();
        let seed = self.seed.unwrap_or(DEFAULT_SEED);
        let (lower, upper) = match self.bounds {
            Some(bounds) => bounds,
            None => (
                T::from(DEFAULT_LOWER).unwrap(),
                T::from(DEFAULT_UPPER).unwrap(),
            ),
        };
        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES);
        let max_iterations = self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS);
        let tolerance = self
            .tolerance
            .unwrap_or_else(|| T::from(DEFAULT_TOLERANCE).unwrap());
        let step = self.step.unwrap_or_else(|| T::from(DEFAULT_STEP).unwrap());

        let strategy = match self.strategy.unwrap_or(StrategyChoice::Random) {
            StrategyChoice::Random => {
                Validator::validate_samples(samples)?;
                Validator::validate_bounds(lower, upper)?;
                Strategy::Random(RandomSearch {
                    samples,
                    lower,
                    upper,
                    seed,
                })
            }
            StrategyChoice::Simplex => {
                Validator::validate_iterations(max_iterations)?;
                Validator::validate_tolerance(tolerance)?;
                Validator::validate_step(step)?;
                Strategy::Simplex {
                    search: SimplexSearch {
                        max_iterations,
                        tolerance,
                        step,
                    },
                    start: self.start,
                }
            }
        };

        Ok(Fitter {
            config: FitConfig {
                loss,
                strategy,
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// A validated, ready-to-run fit configuration.
#[derive(Debug, Clone)]
pub struct Fitter<T> {
    config: FitConfig<T>,
}

impl<T: Float> Fitter<T> {
    /// Fit the configured model against `table`.
    pub fn fit(self, table: &SampleTable<T>) -> Result<FitResult<T>, FitError> {
        FitExecutor::run(table, &self.config)
    }
}
