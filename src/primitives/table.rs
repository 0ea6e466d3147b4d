//! Sample tables: the tabular input to every fit.
//!
//! ## Purpose
//!
//! This module provides [`SampleTable`], the immutable collection of samples
//! a model is fitted against: one response column and one or more predictor
//! columns, which may be continuous or categorical.
//!
//! ## Design notes
//!
//! * **Column-oriented**: Predictors are stored per column, so the fitting
//!   loop walks contiguous slices.
//! * **Immutable once built**: Construction goes through
//!   [`SampleTableBuilder`], which validates shape at `build()`; after that
//!   the table never changes.
//! * **Level coding**: Categorical columns store their values as indices
//!   into an ordered level list (first-appearance order).
//!
//! ## Key concepts
//!
//! * **Row**: one sample: a response value plus one value per predictor.
//! * **Width**: the number of model parameters a column contributes
//!   (continuous: 1; categorical: level count minus the baseline).
//!
//! ## Invariants
//!
//! * Every column has exactly as many rows as the response.
//! * Categorical codes index into the column's level list.
//!
//! ## Non-goals
//!
//! * This module does not parse external data formats.
//! * This module does not handle missing values.

use num_traits::Float;

use crate::primitives::errors::FitError;

// ============================================================================
// Column Storage
// ============================================================================

/// Values of a single predictor column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues<T> {
    /// A continuous (numeric) predictor.
    Continuous(Vec<T>),

    /// A categorical predictor stored as level codes.
    Categorical {
        /// Ordered distinct levels, in first-appearance order.
        levels: Vec<String>,
        /// Per-row index into `levels`.
        codes: Vec<usize>,
    },
}

impl<T> ColumnValues<T> {
    /// Number of rows stored in this column.
    pub fn rows(&self) -> usize {
        match self {
            Self::Continuous(values) => values.len(),
            Self::Categorical { codes, .. } => codes.len(),
        }
    }

    /// Number of model parameters this column contributes.
    ///
    /// The first categorical level is the baseline and contributes none.
    pub fn width(&self) -> usize {
        match self {
            Self::Continuous(_) => 1,
            Self::Categorical { levels, .. } => levels.len().saturating_sub(1),
        }
    }
}

/// A named predictor column.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorColumn<T> {
    name: String,
    values: ColumnValues<T>,
}

impl<T> PredictorColumn<T> {
    /// Name of the column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values of the column.
    pub fn values(&self) -> &ColumnValues<T> {
        &self.values
    }
}

// ============================================================================
// Sample Table
// ============================================================================

/// An immutable table of samples: a response plus predictor columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable<T> {
    predictors: Vec<PredictorColumn<T>>,
    response: Vec<T>,
}

impl<T: Float> SampleTable<T> {
    /// Start building a new table.
    pub fn builder() -> SampleTableBuilder<T> {
        SampleTableBuilder::new()
    }

    /// Number of rows (samples).
    pub fn rows(&self) -> usize {
        self.response.len()
    }

    /// The predictor columns, in insertion order.
    pub fn predictors(&self) -> &[PredictorColumn<T>] {
        &self.predictors
    }

    /// The response column.
    pub fn response(&self) -> &[T] {
        &self.response
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`SampleTable`].
///
/// Columns may be added in any order; shape is validated once at
/// [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SampleTableBuilder<T> {
    predictors: Vec<PredictorColumn<T>>,
    response: Option<Vec<T>>,
    duplicate_param: Option<&'static str>,
}

impl<T: Float> SampleTableBuilder<T> {
    fn new() -> Self {
        Self {
            predictors: Vec::new(),
            response: None,
            duplicate_param: None,
        }
    }

    /// Add a continuous predictor column.
    pub fn continuous(mut self, name: &str, values: Vec<T>) -> Self {
        self.predictors.push(PredictorColumn {
            name: name.to_string(),
            values: ColumnValues::Continuous(values),
        });
        self
    }

    /// Add a categorical predictor column from raw labels.
    ///
    /// Levels are collected in first-appearance order; the first level is
    /// the baseline.
    pub fn categorical(mut self, name: &str, labels: &[&str]) -> Self {
        let mut levels: Vec<String> = Vec::new();
        let mut codes = Vec::with_capacity(labels.len());

        for &label in labels {
            let code = match levels.iter().position(|l| l == label) {
                Some(idx) => idx,
                None => {
                    levels.push(label.to_string());
                    levels.len() - 1
                }
            };
            codes.push(code);
        }

        self.predictors.push(PredictorColumn {
            name: name.to_string(),
            values: ColumnValues::Categorical { levels, codes },
        });
        self
    }

    /// Set the response column.
    pub fn response(mut self, values: Vec<T>) -> Self {
        if self.response.is_some() {
            self.duplicate_param = Some("response");
        }
        self.response = Some(values);
        self
    }

    /// Validate the accumulated columns and produce the table.
    pub fn build(self) -> Result<SampleTable<T>, FitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(FitError::DuplicateParameter { parameter });
        }

        let response = match self.response {
            Some(values) if !values.is_empty() => values,
            _ => return Err(FitError::EmptyTable),
        };

        if self.predictors.is_empty() {
            return Err(FitError::NoPredictors);
        }

        let n = response.len();
        for column in &self.predictors {
            let got = column.values.rows();
            if got != n {
                return Err(FitError::MismatchedLengths {
                    column: column.name.clone(),
                    expected: n,
                    got,
                });
            }
        }

        Ok(SampleTable {
            predictors: self.predictors,
            response,
        })
    }
}
