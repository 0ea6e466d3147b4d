//! Text-based presentation of fits.
//!
//! # Purpose
//!
//! This module renders fitted lines and residuals over the data as
//! in-memory character-grid plots, for interactive inspection of toy
//! tables.

mod scatter;

pub use scatter::{render_fit, render_residuals};
