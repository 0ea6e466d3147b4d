//! Input validation for fit configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions guarding every fit:
//! table shape, finite values, and search-parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `lower < upper` and
//!   positive tolerances.
//! * **Finite Checks**: Ensures all table values are finite (no NaN/Inf).
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the search itself.

use num_traits::Float;

use crate::primitives::errors::FitError;
use crate::primitives::table::{ColumnValues, SampleTable};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and input data.
///
/// Provides static methods returning `Result<(), FitError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Cap on random-search sample counts.
    const MAX_SAMPLES: usize = 10_000_000;

    /// Cap on simplex iterations.
    const MAX_ITERATIONS: usize = 1_000_000;

    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a sample table for fitting.
    pub fn validate_table<T: Float>(table: &SampleTable<T>) -> Result<(), FitError> {
        // Check 1: At least one row (the loss mean divides by the row count)
        let n = table.rows();
        if n < 1 {
            return Err(FitError::TooFewRows { got: n, min: 1 });
        }

        // Check 2: All response values finite
        for (i, &val) in table.response().iter().enumerate() {
            if !val.is_finite() {
                return Err(FitError::InvalidNumericValue(format!(
                    "response[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        // Check 3: All continuous predictor values finite
        for column in table.predictors() {
            if let ColumnValues::Continuous(values) = column.values() {
                for (i, &val) in values.iter().enumerate() {
                    if !val.is_finite() {
                        return Err(FitError::InvalidNumericValue(format!(
                            "{}[{}]={}",
                            column.name(),
                            i,
                            val.to_f64().unwrap_or(f64::NAN)
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the random-search bounds.
    pub fn validate_bounds<T: Float>(lower: T, upper: T) -> Result<(), FitError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(FitError::InvalidBounds {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the random-search sample count.
    pub fn validate_samples(samples: usize) -> Result<(), FitError> {
        if samples < 1 || samples > Self::MAX_SAMPLES {
            return Err(FitError::InvalidSampleCount(samples));
        }
        Ok(())
    }

    /// Validate the simplex convergence tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), FitError> {
        if !tolerance.is_finite() || tolerance <= T::zero() {
            return Err(FitError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the simplex iteration cap.
    pub fn validate_iterations(iterations: usize) -> Result<(), FitError> {
        if iterations < 1 || iterations > Self::MAX_ITERATIONS {
            return Err(FitError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the initial simplex step.
    pub fn validate_step<T: Float>(step: T) -> Result<(), FitError> {
        if !step.is_finite() || step <= T::zero() {
            return Err(FitError::InvalidStep(step.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate a starting vector against the model's parameter count.
    pub fn validate_start_length(got: usize, expected: usize) -> Result<(), FitError> {
        if got != expected {
            return Err(FitError::StartLengthMismatch { expected, got });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), FitError> {
        if let Some(parameter) = duplicate_param {
            return Err(FitError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
