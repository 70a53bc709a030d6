pub mod config;
pub mod documents;
pub mod format;
pub mod history;
pub mod loader;
pub mod metrics;
pub mod paths;
pub mod render;
pub mod tiers;
pub mod warn;
pub mod writer;

use crate::dashboard::config::SiteConfig;
use crate::dashboard::history::CrosspostRecord;
use crate::dashboard::metrics::HeadlineMetrics;
use crate::dashboard::paths::DashboardPaths;
use crate::dashboard::tiers::TierBreakdown;
use serde_json::Value;

/// Everything the renderer needs, computed from the two input documents.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub metrics: HeadlineMetrics,
    pub last_run: Option<String>,
    pub tiers: TierBreakdown,
    pub recent_crossposts: Vec<CrosspostRecord>,
    pub human_moderators: usize,
}

impl DashboardModel {
    pub fn from_documents(summary: &Value, state: &Value, site: &SiteConfig) -> Self {
        Self {
            metrics: metrics::extract_metrics(summary, state),
            last_run: documents::last_run(summary),
            tiers: tiers::classify(state),
            recent_crossposts: history::recent_crossposts(state, site.crosspost_history_limit),
            human_moderators: metrics::human_moderator_count(state, &site.automation_account),
        }
    }
}

pub fn load_model(paths: &DashboardPaths, site: &SiteConfig) -> DashboardModel {
    let summary = loader::load_document(&paths.stats_file, documents::default_run_summary());
    let state = loader::load_document(&paths.state_file, documents::default_operational_state());
    DashboardModel::from_documents(&summary, &state, site)
}
