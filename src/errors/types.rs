use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlagError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    TooLarge(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PlagError {
    /// Maps an I/O failure on `path` to `NotFound` when the path is missing,
    /// keeping every other failure as `Io`.
    pub fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                PlagError::NotFound(format!("{}", path.display()))
            }
            _ => PlagError::Io(std::io::Error::new(
                err.kind(),
                format!("{}: {}", path.display(), err),
            )),
        }
    }

    /// Process exit code used by the CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlagError::Config(_) | PlagError::Yaml(_) => 2,
            PlagError::NotFound(_) => 3,
            PlagError::InvalidRequest(_) | PlagError::TooLarge(_) => 4,
            _ => 1,
        }
    }
}
