use crate::dashboard::warn::{self, WarnEvent};
use serde_json::Value;
use std::fs;
use std::path::Path;

fn parse_document_text(raw: &str) -> Result<Value, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(v) => Ok(v),
        Err(json_err) => json5::from_str::<Value>(raw).map_err(|_| json_err.to_string()),
    }
}

/// Read and parse `path`, or hand back `default` when the file is absent,
/// unreadable, blank, or not parseable. Never fails.
pub fn load_document(path: &Path, default: Value) -> Value {
    if !path.exists() {
        return default;
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            warn::emit(WarnEvent {
                code: "INPUT_UNREADABLE",
                stage: "load",
                action: "read-document",
                source: &path.display().to_string(),
                reason: "read-failed",
                err: &err.to_string(),
            });
            return default;
        }
    };

    if raw.trim().is_empty() {
        return default;
    }

    match parse_document_text(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn::emit(WarnEvent {
                code: "INPUT_CORRUPT",
                stage: "load",
                action: "parse-document",
                source: &path.display().to_string(),
                reason: "json-parse-failed",
                err: &err,
            });
            default
        }
    }
}
