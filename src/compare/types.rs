use serde::Serialize;

/// Outcome for one directory entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub file_name: String,
    /// Percentage of *this file's* normalized text that also appears in the
    /// reference. Directional: it is not the reverse measure. `None` only
    /// for a self-match under the `null` policy.
    pub plagiarism: Option<f64>,
    /// The entry has the reference file's name and was not scored.
    pub self_match: bool,
    /// A diff deadline expired while scoring; the score may be low.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub approximate: bool,
    /// Why the entry could not be scored; its `plagiarism` is then 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ComparisonResult {
    pub fn scored(file_name: impl Into<String>, score: f64) -> Self {
        Self {
            file_name: file_name.into(),
            plagiarism: Some(score),
            self_match: false,
            approximate: false,
            error: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            plagiarism: Some(0.0),
            self_match: false,
            approximate: false,
            error: Some(error.into()),
        }
    }

    pub fn self_match(file_name: impl Into<String>, plagiarism: Option<f64>) -> Self {
        Self {
            file_name: file_name.into(),
            plagiarism,
            self_match: true,
            approximate: false,
            error: None,
        }
    }

    pub fn with_approximate(mut self, approximate: bool) -> Self {
        self.approximate = approximate;
        self
    }

    pub fn score_or_zero(&self) -> f64 {
        self.plagiarism.unwrap_or(0.0)
    }
}
