pub mod generate;
pub mod summary;

use crate::dashboard::DashboardModel;
use crate::dashboard::format::format_last_run;
use crate::dashboard::paths::DashboardPaths;
use crate::dashboard::render::headline_slots;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub command: String,
    pub ok: bool,
    pub details: Vec<String>,
    pub issues: Vec<String>,
}

impl CommandReport {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ok: true,
            details: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn detail(&mut self, text: impl Into<String>) {
        self.details.push(text.into());
    }

    pub fn issue(&mut self, text: impl Into<String>) {
        self.ok = false;
        self.issues.push(text.into());
    }
}

fn input_presence(path: &Path) -> &'static str {
    if path.is_file() {
        "present"
    } else if path.exists() {
        "not-a-file"
    } else {
        "missing"
    }
}

pub fn describe_inputs(paths: &DashboardPaths, report: &mut CommandReport) {
    for (key, path) in [("stats_file", &paths.stats_file), ("state_file", &paths.state_file)] {
        let presence = input_presence(path);
        report.detail(format!("{key}={} ({presence})", path.display()));
        if presence == "not-a-file" {
            report.issue(format!("{key} {} is not a regular file", path.display()));
        }
    }
}

/// Slug used as the detail key for a headline label, e.g. `api_cost`.
pub fn detail_key(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

pub fn describe_model(model: &DashboardModel, report: &mut CommandReport) {
    for slot in headline_slots(model) {
        report.detail(format!("{}={}", detail_key(slot.label), slot.value));
    }
    report.detail(format!(
        "last_run={}",
        format_last_run(model.last_run.as_deref())
    ));
    for (tier, count) in model.tiers.ranked() {
        report.detail(format!("tier.{}={count}", tier.name()));
    }
    report.detail(format!(
        "recent_crossposts={}",
        model.recent_crossposts.len()
    ));
    report.detail(format!("human_moderators={}", model.human_moderators));
}
