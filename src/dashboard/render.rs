//! Static HTML rendering of the dashboard.
//!
//! The page is assembled from independent section renderers. Optional
//! sections return an empty string when they have nothing to show, so the
//! surrounding container disappears along with the data.

use crate::assets;
use crate::dashboard::DashboardModel;
use crate::dashboard::config::SiteConfig;
use crate::dashboard::format::{format_cost, format_last_run, format_number, truncate_with_ellipsis};
use crate::dashboard::history::CrosspostRecord;
use crate::dashboard::tiers::TierBreakdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineSlot {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

impl HeadlineSlot {
    fn new(icon: &'static str, label: &'static str, value: String) -> Self {
        Self { icon, label, value }
    }
}

/// The twelve headline cards, in display order.
pub fn headline_slots(model: &DashboardModel) -> Vec<HeadlineSlot> {
    let m = &model.metrics;
    vec![
        HeadlineSlot::new("📝", "TLDRs Generated", format_number(m.tldrs)),
        HeadlineSlot::new("📊", "Posts Processed", format_number(m.posts_processed)),
        HeadlineSlot::new("💬", "Long Comments", format_number(m.comments_processed)),
        HeadlineSlot::new("🗣️", "Replies Sent", m.replies_sent.to_string()),
        HeadlineSlot::new("📢", "Summons Handled", m.summons_handled.to_string()),
        HeadlineSlot::new("🔄", "Crossposts Made", m.crossposts.to_string()),
        HeadlineSlot::new("🚀", "Flair Users", model.tiers.total.to_string()),
        HeadlineSlot::new("👥", "Users Scanned", format_number(m.users_scanned)),
        HeadlineSlot::new("🔁", "Bot Runs", format_number(m.runs)),
        HeadlineSlot::new("🪙", "Tokens Used", format_number(m.tokens)),
        HeadlineSlot::new("💰", "API Cost", format_cost(m.cost)),
        HeadlineSlot::new("⚡", "Top Accelerator Score", format_number(m.high_score)),
    ]
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_headline_grid(slots: &[HeadlineSlot]) -> String {
    let cards: Vec<String> = slots
        .iter()
        .map(|slot| {
            format!(
                r#"            <div class="stat-card">
                <div class="stat-icon">{icon}</div>
                <div class="stat-value">{value}</div>
                <div class="stat-label">{label}</div>
            </div>"#,
                icon = slot.icon,
                value = html_escape(&slot.value),
                label = slot.label,
            )
        })
        .collect();
    format!(
        "        <div class=\"stats-grid\">\n{}\n        </div>",
        cards.join("\n\n")
    )
}

pub fn render_tier_section(tiers: &TierBreakdown) -> String {
    let ranked = tiers.ranked();
    if ranked.is_empty() {
        return String::new();
    }

    let cards: Vec<String> = ranked
        .iter()
        .map(|(tier, count)| {
            format!(
                r#"                <div class="tier-card" style="border-color: {color}">
                    <div class="tier-name" style="color: {color}">{name}</div>
                    <div class="tier-count">{count}</div>
                    <div class="tier-label">users</div>
                </div>"#,
                color = tier.color(),
                name = tier.name(),
            )
        })
        .collect();

    format!(
        r#"        <div class="section">
            <h2>🚀 Acceleration Flair Breakdown</h2>
            <div class="tier-grid">
{cards}
            </div>
        </div>"#,
        cards = cards.join("\n"),
    )
}

pub fn render_crosspost_section(records: &[CrosspostRecord], site: &SiteConfig) -> String {
    if records.is_empty() {
        return String::new();
    }

    let items: Vec<String> = records
        .iter()
        .map(|record| {
            let title = truncate_with_ellipsis(&record.original_title, site.title_max_chars);
            format!(
                r#"                <div class="crosspost-item">
                    <a href="{url}" target="_blank" class="crosspost-title">{title}</a>
                    <div class="crosspost-meta">
                        <span class="crosspost-score">⬆ {score}</span>
                        <span class="crosspost-date">{date}</span>
                    </div>
                </div>"#,
                url = html_escape(&record.target_url),
                title = html_escape(&title),
                score = record.score_at_crosspost,
                date = html_escape(record.date()),
            )
        })
        .collect();

    format!(
        r#"        <div class="section">
            <h2>🔗 Recent Crossposts to {target}</h2>
            <div class="crosspost-list">
{items}
            </div>
        </div>"#,
        target = html_escape(&site.crosspost_target),
        items = items.join("\n"),
    )
}

fn render_header(site: &SiteConfig) -> String {
    format!(
        r#"        <header>
            <div class="logo">🤖</div>
            <h1>{name}</h1>
            <p class="subtitle">Bot Statistics for {community}</p>
        </header>"#,
        name = html_escape(&site.bot_name),
        community = html_escape(&site.community),
    )
}

fn render_status_bar(last_run: Option<&str>) -> String {
    format!(
        r#"        <div class="status-bar">
            <div class="status-indicator">
                <div class="status-dot"></div>
                <span class="status-text">Bot Active</span>
            </div>
            <div class="last-run">
                Last run: {last_run}
            </div>
        </div>"#,
        last_run = html_escape(&format_last_run(last_run)),
    )
}

fn render_footer(site: &SiteConfig, generated_at: &str) -> String {
    let links: Vec<String> = site
        .footer_links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}">{}</a>"#,
                html_escape(&link.href),
                html_escape(&link.label)
            )
        })
        .collect();
    format!(
        r#"        <footer>
            <div class="footer-links">
                {links}
            </div>
            <p class="generated-time">
                Page generated: {generated_at}
            </p>
        </footer>"#,
        links = links.join("\n                <span>•</span>\n                "),
    )
}

/// Full self-contained page. `generated_at` is the only input not derived
/// from the model, so equal models render identical bytes for equal stamps.
pub fn render_dashboard(model: &DashboardModel, site: &SiteConfig, generated_at: &str) -> String {
    let sections: Vec<String> = [
        render_header(site),
        render_status_bar(model.last_run.as_deref()),
        render_headline_grid(&headline_slots(model)),
        render_tier_section(&model.tiers),
        render_crosspost_section(&model.recent_crossposts, site),
        render_footer(site, generated_at),
    ]
    .into_iter()
    .filter(|section| !section.is_empty())
    .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - Stats Dashboard</title>
    <meta name="description" content="{description}">
    {fonts}
    <style>
{css}    </style>
</head>
<body>
    <div class="container">
{body}
    </div>
</body>
</html>
"#,
        name = html_escape(&site.bot_name),
        description = html_escape(&site.description),
        fonts = assets::font_link_tags(),
        css = assets::dashboard_css(),
        body = sections.join("\n\n"),
    )
}
