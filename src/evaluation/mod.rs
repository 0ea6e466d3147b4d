//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer post-processes completed fits: diagnostic statistics
//! summarizing fit quality.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Models / Search
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Diagnostic metrics (RMSE, MAE, R², residual SD).
pub mod diagnostics;
