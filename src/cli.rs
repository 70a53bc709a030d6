use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::dashboard::paths::DashboardPaths;

#[derive(Debug, Parser)]
#[command(name = "optimist-stats")]
#[command(about = "Render the Optimist Prime bot state files into a static stats dashboard")]
pub struct Cli {
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Render docs/index.html from data/stats.json and data/bot_state.json.
    Generate,
    /// Print the computed dashboard figures without writing anything.
    Summary,
}

fn print_report(report: &commands::CommandReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("command: {}", report.command);
    println!("ok: {}", report.ok);
    if !report.details.is_empty() {
        println!("details:");
        for detail in &report.details {
            println!("- {detail}");
        }
    }
    if !report.issues.is_empty() {
        println!("issues:");
        for issue in &report.issues {
            println!("- {issue}");
        }
    }
    Ok(())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = DashboardPaths::resolve();

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let outcome = commands::generate::run(&paths)?;
            if cli.json {
                print_report(&outcome.report, true)?;
            } else {
                println!("[OK] Generated {}", outcome.output_file.display());
            }
        }
        Command::Summary => {
            let report = commands::summary::run(&paths)?;
            print_report(&report, cli.json)?;
            if !report.ok {
                std::process::exit(2);
            }
        }
    }
    Ok(())
}
