use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string", "minLength": 1 },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 },
                    "workers": { "type": ["integer", "null"], "minimum": 1 }
                }
            },
            "scoring": {
                "type": "object",
                "properties": {
                    "algorithm": { "type": "string", "enum": ["myers", "patience"] },
                    "timeout_ms": { "type": ["integer", "null"], "minimum": 1 },
                    "max_file_bytes": { "type": "integer", "minimum": 1 }
                }
            },
            "policy": {
                "type": "object",
                "properties": {
                    "self_match": { "type": "string", "enum": ["zero", "null", "skip"] }
                }
            }
        }
    })
});
