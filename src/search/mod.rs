//! Layer 3b: Search
//!
//! # Purpose
//!
//! This layer searches parameter space for the vector with the lowest loss.
//! Two interchangeable strategies are provided, both polymorphic over the
//! same capability: a closure mapping a parameter slice to a scalar loss:
//!
//! * [`random::RandomSearch`]: score a fixed number of uniformly-random
//!   parameter vectors from a bounded box and keep the minimum.
//! * [`simplex::SimplexSearch`]: derivative-free downhill-simplex local
//!   minimization from a fixed starting vector.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Models / Search ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

use num_traits::Float;

use crate::math::loss::Loss;
use crate::models::linear::LinearModel;
use crate::primitives::table::SampleTable;

/// Uniform random search over a bounded box.
pub mod random;

/// Downhill-simplex local minimization.
pub mod simplex;

// ============================================================================
// Search Outcome
// ============================================================================

/// The result of a parameter search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    /// The best parameter vector found.
    pub params: Vec<T>,

    /// The loss of the best parameter vector.
    pub loss: T,

    /// Total number of objective evaluations performed.
    pub evaluations: usize,

    /// Whether the strategy's termination criterion was met.
    ///
    /// Always `false` for random search, which has no convergence notion.
    pub converged: bool,
}

// ============================================================================
// Model Objective
// ============================================================================

/// The "given parameters, return loss" capability for one (table, loss) pair.
///
/// Owns a prediction buffer that is refilled on every evaluation, so
/// repeated scoring allocates nothing.
#[derive(Debug)]
pub struct ModelObjective<'a, T: Float> {
    table: &'a SampleTable<T>,
    loss: Loss,
    predictions: Vec<T>,
}

impl<'a, T: Float> ModelObjective<'a, T> {
    /// Bind a table and a loss into an objective.
    pub fn new(table: &'a SampleTable<T>, loss: Loss) -> Self {
        Self {
            table,
            loss,
            predictions: Vec::with_capacity(table.rows()),
        }
    }

    /// Score one parameter vector.
    pub fn evaluate(&mut self, params: &[T]) -> T {
        LinearModel::predict_into(self.table, params, &mut self.predictions);
        self.loss.measure(self.table.response(), &self.predictions)
    }
}
