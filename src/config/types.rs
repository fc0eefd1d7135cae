use serde::{Deserialize, Serialize};

use crate::similarity::DiffAlgorithm;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;
pub const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct PlagConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Concurrent scoring tasks per request. `None` means one per core.
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub algorithm: DiffAlgorithm,
    /// Diff deadline in milliseconds; `null` disables it.
    pub timeout_ms: Option<u64>,
    /// Files larger than this are not scored.
    pub max_file_bytes: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct PolicyConfig {
    pub self_match: SelfMatchPolicy,
}

/// What to report for the directory entry that shares the reference
/// file's name. The entry is never scored; its result always carries
/// `self_match: true`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelfMatchPolicy {
    /// Report `0`.
    #[default]
    Zero,
    /// Report `null`.
    Null,
    /// Leave the entry out of the results.
    Skip,
}
