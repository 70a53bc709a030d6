use crate::dashboard::documents::array_at;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrosspostRecord {
    pub original_title: String,
    pub score_at_crosspost: i64,
    pub timestamp: String,
    pub target_url: String,
}

impl CrosspostRecord {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str, fallback: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or(fallback)
                .to_string()
        };
        Self {
            original_title: text("original_title", "Unknown"),
            score_at_crosspost: value
                .get("score_at_crosspost")
                .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
                .unwrap_or(0),
            timestamp: text("timestamp", ""),
            target_url: text("target_url", "#"),
        }
    }

    /// Portion of the timestamp before the first `T`, or the whole string.
    pub fn date(&self) -> &str {
        match self.timestamp.split_once('T') {
            Some((date, _)) => date,
            None => &self.timestamp,
        }
    }
}

/// Last `limit` entries of an oldest-first log, newest first.
pub fn select_recent<T: Clone>(items: &[T], limit: usize) -> Vec<T> {
    let start = items.len().saturating_sub(limit);
    items[start..].iter().rev().cloned().collect()
}

pub fn recent_crossposts(state: &Value, limit: usize) -> Vec<CrosspostRecord> {
    let history = array_at(state, &["crosspost", "history"]);
    select_recent(history, limit)
        .iter()
        .map(CrosspostRecord::from_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{CrosspostRecord, recent_crossposts, select_recent};
    use serde_json::json;

    #[test]
    fn select_recent_takes_tail_newest_first() {
        let log: Vec<u32> = (1..=8).collect();
        assert_eq!(select_recent(&log, 5), vec![8, 7, 6, 5, 4]);
        assert_eq!(log, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn select_recent_returns_everything_for_short_logs() {
        assert_eq!(select_recent(&[1, 2, 3], 5), vec![3, 2, 1]);
        assert!(select_recent::<u32>(&[], 5).is_empty());
    }

    #[test]
    fn recent_crossposts_reads_history_from_state() {
        let history: Vec<_> = (1..=8)
            .map(|i| {
                json!({
                    "original_title": format!("post {i}"),
                    "score_at_crosspost": i * 10,
                    "timestamp": format!("2024-01-0{i}T12:00:00Z"),
                    "target_url": format!("https://reddit.com/r/ProAI/{i}")
                })
            })
            .collect();
        let state = json!({"crosspost": {"history": history}});
        let recent = recent_crossposts(&state, 5);
        let titles: Vec<&str> = recent.iter().map(|r| r.original_title.as_str()).collect();
        assert_eq!(titles, vec!["post 8", "post 7", "post 6", "post 5", "post 4"]);
        assert_eq!(recent[0].score_at_crosspost, 80);
        assert_eq!(recent[0].date(), "2024-01-08");
    }

    #[test]
    fn record_fields_fall_back_when_missing() {
        let record = CrosspostRecord::from_value(&json!({}));
        assert_eq!(record.original_title, "Unknown");
        assert_eq!(record.score_at_crosspost, 0);
        assert_eq!(record.target_url, "#");
        assert_eq!(record.date(), "");
    }

    #[test]
    fn date_without_time_part_is_kept_whole() {
        let record = CrosspostRecord::from_value(&json!({"timestamp": "2024-03-01"}));
        assert_eq!(record.date(), "2024-03-01");
    }
}
