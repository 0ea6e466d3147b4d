#![cfg(feature = "dev")]
//! Tests for downhill-simplex minimization.

use approx::assert_relative_eq;
use modelfit_rs::internals::search::simplex::SimplexSearch;

/// Sphere objective: sum of squares, minimized at the origin.
fn sphere(p: &[f64]) -> f64 {
    p.iter().map(|&v| v * v).sum()
}

/// Shifted quadratic with minimum 3.0 at (1, -2).
fn shifted_bowl(p: &[f64]) -> f64 {
    let a = p[0] - 1.0;
    let b = p[1] + 2.0;
    3.0 + a * a + 2.0 * b * b
}

fn default_search() -> SimplexSearch<f64> {
    SimplexSearch {
        max_iterations: 2_000,
        tolerance: 1e-12,
        step: 0.5,
    }
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_converges_to_known_minimum() {
    let outcome = default_search().minimize(&[5.0, 5.0], shifted_bowl);

    assert!(outcome.converged);
    assert_relative_eq!(outcome.loss, 3.0, epsilon = 1e-6);
    assert_relative_eq!(outcome.params[0], 1.0, epsilon = 1e-4);
    assert_relative_eq!(outcome.params[1], -2.0, epsilon = 1e-4);
}

#[test]
fn test_two_starts_reach_the_same_loss() {
    // A single well-defined global minimum: both starting points must land
    // on the same loss within floating-point tolerance.
    let search = default_search();

    let from_origin = search.minimize(&[0.0, 0.0], shifted_bowl);
    let from_far = search.minimize(&[40.0, -30.0], shifted_bowl);

    assert!(from_origin.converged);
    assert!(from_far.converged);
    assert_relative_eq!(from_origin.loss, from_far.loss, epsilon = 1e-6);
}

#[test]
fn test_higher_dimensional_sphere() {
    let search = SimplexSearch {
        max_iterations: 20_000,
        tolerance: 1e-12,
        step: 0.5,
    };

    let outcome = search.minimize(&[2.0, -3.0, 1.0, 4.0, -1.0], sphere);

    assert!(outcome.converged);
    assert!(outcome.loss < 1e-8, "loss was {}", outcome.loss);
}

// ============================================================================
// Termination Behavior
// ============================================================================

#[test]
fn test_iteration_cap_reported_as_not_converged() {
    // One iteration cannot collapse the simplex on a non-trivial objective.
    let search = SimplexSearch {
        max_iterations: 1,
        tolerance: 1e-15,
        step: 0.5,
    };

    let outcome = search.minimize(&[5.0, 5.0], sphere);
    assert!(!outcome.converged);
}

#[test]
fn test_never_worse_than_start() {
    let start = [8.0, -8.0];
    let start_loss = sphere(&start);

    let outcome = default_search().minimize(&start, sphere);
    assert!(outcome.loss <= start_loss);
    assert!(outcome.evaluations > start.len() + 1);
}

#[test]
fn test_one_dimensional_objective() {
    let outcome = default_search().minimize(&[10.0], |p| (p[0] - 4.0).abs());

    assert!(outcome.converged);
    assert_relative_eq!(outcome.params[0], 4.0, epsilon = 1e-4);
}
