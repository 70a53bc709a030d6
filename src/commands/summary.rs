use anyhow::Result;

use crate::commands::{CommandReport, describe_inputs, describe_model};
use crate::dashboard::config::SiteConfig;
use crate::dashboard::load_model;
use crate::dashboard::paths::DashboardPaths;

pub fn run(paths: &DashboardPaths) -> Result<CommandReport> {
    let site = SiteConfig::default();
    let model = load_model(paths, &site);

    let mut report = CommandReport::new("summary");
    describe_inputs(paths, &mut report);
    describe_model(&model, &mut report);
    report.detail(format!("flair_users_unranked={}", unranked_flair_users(&model)));
    Ok(report)
}

fn unranked_flair_users(model: &crate::dashboard::DashboardModel) -> u64 {
    let ranked: u64 = model.tiers.ranked().iter().map(|(_, count)| count).sum();
    model.tiers.total - ranked
}
