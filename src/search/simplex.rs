//! Downhill-simplex (Nelder-Mead) local minimization.
//!
//! ## Purpose
//!
//! This module implements derivative-free local minimization: starting from
//! a fixed parameter vector, a simplex of `dims + 1` vertices is iteratively
//! reflected, expanded, contracted, or shrunk until the loss spread across
//! the simplex falls below a tolerance or the iteration cap is reached.
//!
//! ## Design notes
//!
//! * **Derivative-free**: Only loss values are used; the objective need not
//!   be differentiable.
//! * **Standard moves**: Reflection, expansion, contraction, and shrink with
//!   the classical coefficients, kept as associated constants.
//!
//! ## Key concepts
//!
//! * **Local optimum**: The method terminates at a point where no simplex
//!   move reduces the loss. It is NOT guaranteed to find the global optimum:
//!   the result depends on the starting point, and the method becomes
//!   increasingly unreliable as parameter dimensionality grows. Callers who
//!   need global coverage should combine it with a broader search.
//!
//! ## Invariants
//!
//! * The reported loss never exceeds the loss at the starting vector.
//! * The simplex always contains `dims + 1` vertices.
//!
//! ## Non-goals
//!
//! * This module does not restart from multiple points.
//! * This module does not validate its configuration (see the engine
//!   validator).

use core::cmp::Ordering;

use num_traits::Float;

use crate::search::SearchOutcome;

// ============================================================================
// Simplex Search
// ============================================================================

/// Configuration for downhill-simplex minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexSearch<T> {
    /// Maximum number of simplex iterations before giving up.
    pub max_iterations: usize,

    /// Termination threshold on the best-to-worst loss spread.
    pub tolerance: T,

    /// Offset added to each coordinate when building the initial simplex.
    pub step: T,
}

impl<T: Float> SimplexSearch<T> {
    /// Reflection coefficient.
    const ALPHA: f64 = 1.0;

    /// Expansion coefficient.
    const GAMMA: f64 = 2.0;

    /// Contraction coefficient.
    const RHO: f64 = 0.5;

    /// Shrink coefficient.
    const SIGMA: f64 = 0.5;

    /// Minimize `objective` starting from `start`.
    ///
    /// # Preconditions
    ///
    /// `start` is non-empty, `tolerance > 0`, `step > 0`, and
    /// `max_iterations >= 1`.
    pub fn minimize<F>(&self, start: &[T], mut objective: F) -> SearchOutcome<T>
    where
        F: FnMut(&[T]) -> T,
    {
        debug_assert!(!start.is_empty());

        let dims = start.len();
        let alpha = T::from(Self::ALPHA).unwrap();
        let gamma = T::from(Self::GAMMA).unwrap();
        let rho = T::from(Self::RHO).unwrap();
        let sigma = T::from(Self::SIGMA).unwrap();

        // Initial simplex: the start vector plus one vertex per coordinate,
        // each offset by `step` along that axis.
        let mut simplex: Vec<Vec<T>> = Vec::with_capacity(dims + 1);
        simplex.push(start.to_vec());
        for i in 0..dims {
            let mut vertex = start.to_vec();
            vertex[i] = vertex[i] + self.step;
            simplex.push(vertex);
        }

        let mut losses: Vec<T> = simplex.iter().map(|v| objective(v)).collect();
        let mut evaluations = dims + 1;

        let mut centroid = vec![T::zero(); dims];
        let mut reflected = vec![T::zero(); dims];
        let mut trial = vec![T::zero(); dims];

        let mut converged = false;

        for _ in 0..self.max_iterations {
            Self::sort_by_loss(&mut simplex, &mut losses);

            let best = losses[0];
            let worst = losses[dims];
            if (worst - best).abs() <= self.tolerance {
                converged = true;
                break;
            }

            // Centroid of all vertices except the worst.
            let n = T::from(dims).unwrap();
            for slot in centroid.iter_mut() {
                *slot = T::zero();
            }
            for vertex in simplex.iter().take(dims) {
                for (slot, &coord) in centroid.iter_mut().zip(vertex.iter()) {
                    *slot = *slot + coord;
                }
            }
            for slot in centroid.iter_mut() {
                *slot = *slot / n;
            }

            // Reflection.
            for ((slot, &c), &w) in reflected
                .iter_mut()
                .zip(centroid.iter())
                .zip(simplex[dims].iter())
            {
                *slot = c + alpha * (c - w);
            }
            let reflected_loss = objective(&reflected);
            evaluations += 1;

            if reflected_loss < losses[0] {
                // Expansion.
                for ((slot, &c), &r) in trial
                    .iter_mut()
                    .zip(centroid.iter())
                    .zip(reflected.iter())
                {
                    *slot = c + gamma * (r - c);
                }
                let expanded_loss = objective(&trial);
                evaluations += 1;

                if expanded_loss < reflected_loss {
                    simplex[dims].copy_from_slice(&trial);
                    losses[dims] = expanded_loss;
                } else {
                    simplex[dims].copy_from_slice(&reflected);
                    losses[dims] = reflected_loss;
                }
                continue;
            }

            if reflected_loss < losses[dims - 1] {
                simplex[dims].copy_from_slice(&reflected);
                losses[dims] = reflected_loss;
                continue;
            }

            // Contraction, toward the better of the reflected and worst points.
            if reflected_loss < losses[dims] {
                for ((slot, &c), &r) in trial
                    .iter_mut()
                    .zip(centroid.iter())
                    .zip(reflected.iter())
                {
                    *slot = c + rho * (r - c);
                }
            } else {
                for ((slot, &c), &w) in trial
                    .iter_mut()
                    .zip(centroid.iter())
                    .zip(simplex[dims].iter())
                {
                    *slot = c + rho * (w - c);
                }
            }
            let contracted_loss = objective(&trial);
            evaluations += 1;

            if contracted_loss < reflected_loss.min(losses[dims]) {
                simplex[dims].copy_from_slice(&trial);
                losses[dims] = contracted_loss;
                continue;
            }

            // Shrink everything toward the best vertex.
            let (head, tail) = simplex.split_at_mut(1);
            let best_vertex = &head[0];
            for (vertex, loss) in tail.iter_mut().zip(losses.iter_mut().skip(1)) {
                for (coord, &b) in vertex.iter_mut().zip(best_vertex.iter()) {
                    *coord = b + sigma * (*coord - b);
                }
                *loss = objective(vertex);
                evaluations += 1;
            }
        }

        Self::sort_by_loss(&mut simplex, &mut losses);

        SearchOutcome {
            params: simplex.swap_remove(0),
            loss: losses[0],
            evaluations,
            converged,
        }
    }

    /// Order vertices by ascending loss.
    fn sort_by_loss(simplex: &mut [Vec<T>], losses: &mut [T]) {
        let mut order: Vec<usize> = (0..losses.len()).collect();
        order.sort_by(|&a, &b| losses[a].partial_cmp(&losses[b]).unwrap_or(Ordering::Equal));

        let sorted_simplex: Vec<Vec<T>> = order.iter().map(|&i| simplex[i].clone()).collect();
        let sorted_losses: Vec<T> = order.iter().map(|&i| losses[i]).collect();

        for (slot, vertex) in simplex.iter_mut().zip(sorted_simplex) {
            *slot = vertex;
        }
        losses.copy_from_slice(&sorted_losses);
    }
}
