use serde::{Deserialize, Serialize};
use crate::errors::PlagError;

#[derive(Debug, Deserialize)]
pub struct ComparisonRequest {
    pub file_path: String,
    pub folder_path: String,
}

impl ComparisonRequest {
    pub fn validate(&self) -> Result<(), PlagError> {
        if self.file_path.trim().is_empty() {
            return Err(PlagError::InvalidRequest("file_path must not be empty".into()));
        }
        if self.folder_path.trim().is_empty() {
            return Err(PlagError::InvalidRequest("folder_path must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub reference: String,
    pub candidate: String,
}

/// Similarity of `candidate` to `reference`, measured over the candidate's
/// normalized length.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub plagiarism: f64,
    pub equal_chars: usize,
    pub total_chars: usize,
    pub identical: bool,
    /// A diff deadline expired; shared text may be under-counted.
    pub approximate: bool,
}
