//! Layer 3a: Models
//!
//! # Purpose
//!
//! This layer defines the candidate model family: how a parameter vector is
//! turned into per-row predictions over a sample table.
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

/// Linear candidate models.
pub mod linear;
