//! # modelfit - Fitting Candidate Models by Scalar Loss
//!
//! A small library for building intuition about model fitting: score
//! candidate linear models on in-memory sample tables with a scalar loss,
//! and search parameter space for the best-scoring candidate.
//!
//! ## What does it do?
//!
//! A *candidate model* is a parameter vector (an intercept plus one
//! coefficient per predictor) interpreted against a [`SampleTable`]
//! (one response column, one or more continuous or categorical predictor
//! columns). Each candidate is reduced to a single non-negative *loss*:
//!
//! * **RMSE**: root-mean-square error (the default)
//! * **MAE**: mean absolute error
//!
//! Two interchangeable search strategies look for the candidate with the
//! lowest loss:
//!
//! * **Random search**: draw a fixed number of parameter vectors uniformly
//!   from a bounded box and keep the minimum. No convergence guarantee;
//!   quality is bounded by the sample count and the box coverage. Fully
//!   deterministic for a fixed seed.
//! * **Downhill simplex**: derivative-free local minimization from a fixed
//!   starting vector. Terminates at a *local* optimum: the result depends
//!   on the starting point, increasingly so as the parameter count grows.
//!
//! [`SampleTable`]: prelude::SampleTable
//!
//! ## Quick Start
//!
//! ```rust
//! use modelfit_rs::prelude::*;
//!
//! let table = SampleTable::builder()
//!     .continuous("x", vec![1.0, 2.0, 3.0])
//!     .response(vec![2.0, 4.0, 6.0])
//!     .build()?;
//!
//! // Build the fit configuration
//! let fitter = ModelFit::new()
//!     .loss(Rmse)         // Minimize root-mean-square error
//!     .simplex()          // Derivative-free local minimization
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = fitter.fit(&table)?;
//!
//! // The table lies exactly on y = 2x, so the fit recovers (0, 2)
//! assert!(result.loss_value < 1e-4);
//! println!("{}", result);
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Rows: 3
//!   RMSE: 0.000000
//!   Strategy: downhill simplex (152 evaluations, converged)
//!
//! Coefficients:
//!   intercept             0.00000
//!   x                     2.00000
//!
//! Fitted Data:
//!      Row       Actual    Predicted     Residual
//!   ----------------------------------------------
//!        0      2.00000      2.00000      0.00000
//!        1      4.00000      4.00000      0.00000
//!        2      6.00000      6.00000      0.00000
//! ```
//!
//! ### Random search
//!
//! ```rust
//! use modelfit_rs::prelude::*;
//!
//! let table = modelfit_rs::datasets::linear_trend(42);
//!
//! let fitter = ModelFit::new()
//!     .loss(Mae)
//!     .random(50_000)         // 50K uniform draws
//!     .bounds(-20.0, 20.0)    // Search box, per coordinate
//!     .seed(7)                // Reproducible draws
//!     .return_diagnostics()
//!     .build()?;
//!
//! let result = fitter.fit(&table)?;
//!
//! if let Some(diag) = &result.diagnostics {
//!     println!("R^2: {:.4}", diag.r_squared);
//! }
//! # Result::<(), FitError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, FitError>`; the `?` operator is
//! idiomatic. Configuration problems (bad bounds, zero samples, duplicate
//! parameters) surface at `build()`; data problems (non-finite values,
//! start-vector length) surface at `fit()`.
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults. You only need to specify
//! what you want to change.
//!
//! | Parameter              | Default      | Range/Options  | Description                               | Strategy |
//! |------------------------|--------------|----------------|-------------------------------------------|----------|
//! | **loss**               | `Rmse`       | `Rmse`, `Mae`  | Scalar reduction of prediction errors     | All      |
//! | **random**             | 10000        | [1, 10^7]      | Number of uniform draws                   | Random   |
//! | **bounds**             | [-10, 10]    | lower < upper  | Per-coordinate search box                 | Random   |
//! | **seed**               | 0            | any u64        | RNG seed (fixed seed = deterministic)     | Random   |
//! | **start**              | all zeros    | model length   | Starting parameter vector                 | Simplex  |
//! | **max_iterations**     | 500          | [1, 10^6]      | Simplex iteration cap                     | Simplex  |
//! | **tolerance**          | 1e-8         | > 0            | Loss-spread termination threshold         | Simplex  |
//! | **step**               | 0.5          | > 0            | Initial simplex edge offset               | Simplex  |
//! | **return_diagnostics** | false        | true/false     | Include RMSE, MAE, R², residual SD        | All      |
//!
//! ## Choosing a strategy
//!
//! | Strategy   | Use case                                    | Caveats                                              |
//! |------------|---------------------------------------------|------------------------------------------------------|
//! | Random     | Few parameters, rough answers, no tuning    | Coverage decays quickly with dimensionality          |
//! | Simplex    | Smooth objectives, refined local answers    | Local optimum only; sensitive to the starting point  |
//!
//! A common pattern is to run both: a coarse random pass to find a
//! promising region, then a simplex started from the random winner.
//!
//! ## Presentation
//!
//! For tables with a single continuous predictor, the fit and its
//! residuals can be rendered as in-memory text plots:
//!
//! ```rust
//! use modelfit_rs::prelude::*;
//! use modelfit_rs::presentation;
//!
//! let table = modelfit_rs::datasets::linear_trend(1);
//! let result = ModelFit::new().simplex().build()?.fit(&table)?;
//!
//! let plot = presentation::render_fit(&table, &result, 60, 15)?;
//! println!("{}", plot);
//! # Result::<(), FitError>::Ok(())
//! ```

#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and error types.
//
// Contains the sample table and the crate-wide error enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the scalar loss reductions (RMSE, MAE).
mod math;

// Layer 3a: Models - the candidate model family.
//
// Contains the linear model: parameter ordering, per-row prediction.
mod models;

// Layer 3b: Search - parameter-space search strategies.
//
// Contains random search and downhill-simplex minimization, both driven
// by the same parameters-to-loss capability.
mod search;

// Layer 4: Evaluation - post-processing and diagnostics.
//
// Contains diagnostic metrics (RMSE, MAE, R², residual SD).
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains input validation, strategy dispatch, and result assembly.
mod engine;

// High-level fluent API for configuring and running fits.
mod api;

/// Toy datasets: fixed and seeded-synthetic sample tables.
pub mod datasets;

/// Text-based presentation of fits and residuals.
pub mod presentation;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use modelfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ColumnValues, Diagnostics, FitError, FitResult, Fitter, Loss,
        Loss::{Mae, Rmse},
        ModelFit, PredictorColumn, SampleTable, SampleTableBuilder, SearchOutcome, StrategyUsed,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and errors.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal model family.
    pub mod models {
        pub use crate::models::*;
    }
    /// Internal search strategies.
    pub mod search {
        pub use crate::search::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
