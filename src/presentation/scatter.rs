//! Text rendering of fits and residuals.
//!
//! ## Purpose
//!
//! This module draws in-memory character-grid plots: observed points with
//! fitted values overlaid over a single continuous predictor, and residuals
//! around a zero baseline. The output is a plain `String` suitable for any
//! terminal.
//!
//! ## Design notes
//!
//! * **In-memory only**: No files, no devices; the plot object is the
//!   returned string.
//! * **Single predictor**: Both renderings project onto one continuous
//!   x-axis. Tables with any other shape are rejected with a typed error.
//! * **Draw order**: Fitted marks are drawn after observed marks, so where
//!   both land on the same cell the fit wins.
//!
//! ## Key concepts
//!
//! * **Glyphs**: `o` observed, `*` fitted, `-` zero baseline (residuals).
//!
//! ## Invariants
//!
//! * The grid is exactly `height` lines of `width` characters plus a frame.
//! * Degenerate ranges (all-equal x or y) still render without division by
//!   zero.
//!
//! ## Non-goals
//!
//! * This module does not produce graphical output (SVG, bitmaps).
//! * This module does not scale to large datasets; it is a reading aid for
//!   toy tables.

use num_traits::Float;

use crate::engine::output::FitResult;
use crate::primitives::errors::FitError;
use crate::primitives::table::{ColumnValues, SampleTable};

// ============================================================================
// Public Rendering API
// ============================================================================

/// Render observed points (`o`) and fitted values (`*`) over the table's
/// single continuous predictor.
pub fn render_fit<T: Float>(
    table: &SampleTable<T>,
    result: &FitResult<T>,
    width: usize,
    height: usize,
) -> Result<String, FitError> {
    let x = single_continuous_predictor(table)?;
    let (width, height) = (width.max(2), height.max(2));

    let mut grid = CharGrid::new(width, height);
    let x_range = Range::over(x);
    let y_range = Range::over_two(table.response(), &result.predictions);

    for (&xi, &yi) in x.iter().zip(table.response().iter()) {
        grid.mark(x_range.position(xi, width), y_range.position(yi, height), 'o');
    }
    for (&xi, &pi) in x.iter().zip(result.predictions.iter()) {
        grid.mark(x_range.position(xi, width), y_range.position(pi, height), '*');
    }

    Ok(grid.render())
}

/// Render residuals (`o`) around a zero baseline (`-`) over the table's
/// single continuous predictor.
pub fn render_residuals<T: Float>(
    table: &SampleTable<T>,
    result: &FitResult<T>,
    width: usize,
    height: usize,
) -> Result<String, FitError> {
    let x = single_continuous_predictor(table)?;
    let (width, height) = (width.max(2), height.max(2));

    let mut grid = CharGrid::new(width, height);
    let x_range = Range::over(x);

    // Symmetric y-range so the zero line sits mid-grid.
    let max_abs = result
        .residuals
        .iter()
        .fold(T::zero(), |acc, &r| acc.max(r.abs()));
    let y_range = Range {
        min: -max_abs,
        max: max_abs,
    };

    let zero_row = y_range.position(T::zero(), height);
    for col in 0..width {
        grid.mark(col, zero_row, '-');
    }

    for (&xi, &ri) in x.iter().zip(result.residuals.iter()) {
        grid.mark(x_range.position(xi, width), y_range.position(ri, height), 'o');
    }

    Ok(grid.render())
}

// ============================================================================
// Internals
// ============================================================================

/// Extract the table's single continuous predictor, or explain why not.
fn single_continuous_predictor<T: Float>(table: &SampleTable<T>) -> Result<&[T], FitError> {
    let predictors = table.predictors();
    if predictors.len() != 1 {
        return Err(FitError::PlotUnavailable(format!(
            "need exactly 1 predictor, table has {}",
            predictors.len()
        )));
    }
    match predictors[0].values() {
        ColumnValues::Continuous(values) => Ok(values),
        ColumnValues::Categorical { .. } => Err(FitError::PlotUnavailable(format!(
            "predictor '{}' is categorical",
            predictors[0].name()
        ))),
    }
}

/// A min/max range with a guarded projection onto grid cells.
struct Range<T> {
    min: T,
    max: T,
}

impl<T: Float> Range<T> {
    fn over(values: &[T]) -> Self {
        let min = values.iter().copied().fold(T::infinity(), T::min);
        let max = values.iter().copied().fold(T::neg_infinity(), T::max);
        Self { min, max }
    }

    fn over_two(a: &[T], b: &[T]) -> Self {
        let first = Self::over(a);
        let second = Self::over(b);
        Self {
            min: first.min.min(second.min),
            max: first.max.max(second.max),
        }
    }

    /// Project a value onto `[0, cells)`. A zero-width range maps to the
    /// middle cell.
    fn position(&self, value: T, cells: usize) -> usize {
        let span = self.max - self.min;
        if span <= T::zero() {
            return cells / 2;
        }
        let unit = (value - self.min) / span;
        let scaled = unit * T::from(cells - 1).unwrap();
        let idx = scaled.round().to_f64().unwrap_or(0.0) as usize;
        idx.min(cells - 1)
    }
}

/// A fixed-size character grid with row 0 at the top.
struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl CharGrid {
    fn new(width: usize, height: usize) -> Self {
        let width = width.max(2);
        let height = height.max(2);
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Place a glyph; `row` counts upward from the bottom of the plot.
    fn mark(&mut self, col: usize, row: usize, glyph: char) {
        let flipped = self.height - 1 - row.min(self.height - 1);
        self.cells[flipped * self.width + col.min(self.width - 1)] = glyph;
    }

    /// Assemble the framed grid into a string.
    fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 4) * (self.height + 2));

        out.push('+');
        out.push_str(&"-".repeat(self.width));
        out.push_str("+\n");

        for row in 0..self.height {
            out.push('|');
            for col in 0..self.width {
                out.push(self.cells[row * self.width + col]);
            }
            out.push_str("|\n");
        }

        out.push('+');
        out.push_str(&"-".repeat(self.width));
        out.push('+');
        out.push('\n');

        out
    }
}
