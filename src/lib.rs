//! Text similarity service for plagiarism detection.
//!
//! [`similarity`] holds the pure scoring core; [`compare`], [`api`] and
//! [`cli`] wrap it with directory scanning, HTTP and command-line front ends.

pub mod api;
pub mod cli;
pub mod compare;
pub mod config;
pub mod errors;
pub mod reporting;
pub mod similarity;
pub mod utils;

pub use errors::PlagError;
pub use similarity::{normalize, score};
