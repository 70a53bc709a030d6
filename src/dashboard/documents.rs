//! Defaults and tolerant accessors for the two input documents.
//!
//! The run-summary document (`data/stats.json`) carries cumulative run
//! counters; the operational-state document (`data/bot_state.json`) carries
//! processed-item collections, alternate counters, crosspost history and
//! acceleration membership. Both are owned by the bot loop and read here
//! without a fixed schema: any key may be missing or hold the wrong type.

use serde_json::{Value, json};

pub fn default_run_summary() -> Value {
    json!({
        "total_tldrs": 0,
        "total_tokens": 0,
        "total_cost": 0.0,
        "runs": 0,
        "last_run": null
    })
}

pub fn default_operational_state() -> Value {
    json!({
        "processed_posts": [],
        "processed_comments": [],
        "replied_to_comments": [],
        "summon_responses": [],
        "stats": {},
        "crosspost": {"history": []},
        "acceleration": {"opted_in_users": {}, "scanned_users": {}, "high_score": 0},
        "moderator_cache": {"moderators": []}
    })
}

pub fn path_value<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cursor = root;
    for part in path {
        cursor = cursor.get(*part)?;
    }
    Some(cursor)
}

/// Non-negative integer at `path`. Floats are truncated; anything else is absent.
pub fn count_at(root: &Value, path: &[&str]) -> Option<u64> {
    let value = path_value(root, path)?;
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 => Some(f as u64),
        _ => None,
    }
}

pub fn number_at(root: &Value, path: &[&str]) -> Option<f64> {
    path_value(root, path)?.as_f64()
}

/// Cardinality of the array or object at `path`.
pub fn len_at(root: &Value, path: &[&str]) -> Option<u64> {
    match path_value(root, path)? {
        Value::Array(items) => Some(items.len() as u64),
        Value::Object(map) => Some(map.len() as u64),
        _ => None,
    }
}

pub fn array_at<'a>(root: &'a Value, path: &[&str]) -> &'a [Value] {
    path_value(root, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Raw `last_run` marker; `None` when absent or null.
pub fn last_run(summary: &Value) -> Option<String> {
    match summary.get("last_run")? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
