use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

use crate::commands::{CommandReport, describe_inputs, describe_model};
use crate::dashboard::config::SiteConfig;
use crate::dashboard::format::generation_stamp;
use crate::dashboard::paths::DashboardPaths;
use crate::dashboard::{load_model, render, writer};

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub output_file: PathBuf,
    pub report: CommandReport,
}

pub fn run(paths: &DashboardPaths) -> Result<GenerateOutcome> {
    let site = SiteConfig::default();
    let model = load_model(paths, &site);
    let html = render::render_dashboard(&model, &site, &generation_stamp(Utc::now()));

    writer::write_report(&paths.output_file, &html)
        .with_context(|| format!("could not publish {}", paths.output_file.display()))?;

    let mut report = CommandReport::new("generate");
    describe_inputs(paths, &mut report);
    describe_model(&model, &mut report);
    report.detail(format!("output_file={}", paths.output_file.display()));
    report.detail(format!("bytes_written={}", html.len()));

    Ok(GenerateOutcome {
        output_file: paths.output_file.clone(),
        report,
    })
}
