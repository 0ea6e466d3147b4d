//! Uniform random search over a bounded parameter box.
//!
//! ## Purpose
//!
//! This module implements the simplest search strategy: draw a fixed number
//! of independent parameter vectors uniformly from `[lower, upper]` in every
//! coordinate, score each one, and report the minimum.
//!
//! ## Design notes
//!
//! * **Seeded**: Draws come from a seeded [`StdRng`], so a fixed seed makes
//!   the search fully deterministic.
//! * **Streaming minimum**: Candidates are scored as they are drawn; only
//!   the best vector is retained.
//!
//! ## Key concepts
//!
//! * **Coverage**: Result quality is bounded by the sample count and by how
//!   much of the box the draws cover. There is no convergence guarantee; the
//!   reported outcome never claims one.
//!
//! ## Invariants
//!
//! * The reported loss is <= the loss of every sampled vector.
//! * Exactly `samples` objective evaluations are performed.
//!
//! ## Non-goals
//!
//! * This module does not adapt the sampling distribution between draws.
//! * This module does not validate its configuration (see the engine
//!   validator).

use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::search::SearchOutcome;

// ============================================================================
// Random Search
// ============================================================================

/// Configuration for uniform random search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomSearch<T> {
    /// Number of parameter vectors to draw and score.
    pub samples: usize,

    /// Lower bound of the search box, applied per coordinate.
    pub lower: T,

    /// Upper bound of the search box, applied per coordinate.
    pub upper: T,

    /// Seed for the random number generator.
    pub seed: u64,
}

impl<T: Float> RandomSearch<T> {
    /// Minimize `objective` over `dims`-dimensional parameter vectors.
    ///
    /// # Preconditions
    ///
    /// `samples >= 1`, `dims >= 1`, and `lower < upper` with both finite.
    pub fn minimize<F>(&self, dims: usize, mut objective: F) -> SearchOutcome<T>
    where
        F: FnMut(&[T]) -> T,
    {
        debug_assert!(self.samples >= 1);
        debug_assert!(dims >= 1);

        let mut rng = StdRng::seed_from_u64(self.seed);
        let span = self.upper - self.lower;

        let mut candidate = vec![T::zero(); dims];
        let mut best_params = vec![T::zero(); dims];
        let mut best_loss = T::infinity();

        for _ in 0..self.samples {
            for slot in candidate.iter_mut() {
                let u = T::from(rng.gen::<f64>()).unwrap();
                *slot = self.lower + span * u;
            }

            let loss = objective(&candidate);
            if loss < best_loss {
                best_loss = loss;
                best_params.copy_from_slice(&candidate);
            }
        }

        SearchOutcome {
            params: best_params,
            loss: best_loss,
            evaluations: self.samples,
            converged: false,
        }
    }
}
