use std::path::Path;
use crate::errors::PlagError;
use super::types::PlagConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<PlagConfig, PlagError> {
    if !path.exists() {
        return Err(PlagError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(PlagError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config = parse_config_str(&content)?;
    debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}

/// Loads `path` when given, otherwise returns the built-in defaults.
pub async fn load_config(path: Option<&Path>) -> Result<PlagConfig, PlagError> {
    match path {
        Some(path) => parse_config(path).await,
        None => Ok(PlagConfig::default()),
    }
}

pub(crate) fn parse_config_str(content: &str) -> Result<PlagConfig, PlagError> {
    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(PlagConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: PlagConfig = serde_yaml::from_value(yaml)
        .map_err(|e| PlagError::Config(format!("Invalid configuration: {}", e)))?;

    validate_values(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), PlagError> {
    // Convert YAML value to JSON for schema validation
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| PlagError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| PlagError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        // Advisory only: typed parsing and value checks are authoritative.
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Reject values that deserialize fine but cannot be served.
fn validate_values(config: &PlagConfig) -> Result<(), PlagError> {
    if config.server.host.trim().is_empty() {
        return Err(PlagError::Config("server.host must not be empty".into()));
    }
    if config.server.port == 0 {
        return Err(PlagError::Config("server.port must be between 1 and 65535".into()));
    }
    if config.server.workers == Some(0) {
        return Err(PlagError::Config("server.workers must be at least 1".into()));
    }
    if config.scoring.max_file_bytes == 0 {
        return Err(PlagError::Config("scoring.max_file_bytes must be positive".into()));
    }
    if config.scoring.timeout_ms == Some(0) {
        return Err(PlagError::Config(
            "scoring.timeout_ms must be positive (use null to disable)".into(),
        ));
    }
    Ok(())
}
