//! Text normalization and directional similarity scoring.
//!
//! Everything here is pure: no I/O, no shared state, safe to call from any
//! number of threads at once.

pub mod normalizer;
pub mod scorer;
pub mod spans;

pub use normalizer::{normalize, normalized_lines};
pub use scorer::{score, DiffAlgorithm, ScoreBreakdown, Scorer};
pub use spans::{DiffSpan, SpanTag};
