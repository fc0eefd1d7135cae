//! Directory comparison: file loading, self-match handling and concurrent
//! batch scoring around the pure [`crate::similarity`] core.

pub mod batch;
pub mod policy;
pub mod scanner;
pub mod types;

pub use batch::BatchComparer;
pub use scanner::{base_name, list_candidates, read_document, Candidate};
pub use types::ComparisonResult;
