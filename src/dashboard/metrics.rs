//! Headline counter extraction.
//!
//! The run-summary and operational-state documents both track some of the
//! same counters and may disagree after a partial reset. Every counter is
//! resolved through one ordered [`Source`] chain declared here; the first
//! source that yields a value wins, and an exhausted chain yields zero.

use crate::dashboard::documents::{array_at, count_at, len_at, number_at};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    RunSummary,
    OperationalState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Counter that only counts when non-zero.
    Truthy(Document, &'static [&'static str]),
    /// Counter that counts whenever it is present, zero included.
    Present(Document, &'static [&'static str]),
    /// Cardinality of a collection.
    Length(Document, &'static [&'static str]),
}

use Document::{OperationalState, RunSummary};

pub const TLDRS: &[Source] = &[
    Source::Truthy(RunSummary, &["total_tldrs"]),
    Source::Present(OperationalState, &["stats", "total_tldrs_generated"]),
];
pub const POSTS_PROCESSED: &[Source] = &[
    Source::Present(OperationalState, &["stats", "total_posts_processed"]),
    Source::Length(OperationalState, &["processed_posts"]),
];
pub const COMMENTS_PROCESSED: &[Source] =
    &[Source::Length(OperationalState, &["processed_comments"])];
pub const REPLIES_SENT: &[Source] = &[
    Source::Present(OperationalState, &["stats", "total_replies_sent"]),
    Source::Length(OperationalState, &["replied_to_comments"]),
];
pub const SUMMONS_HANDLED: &[Source] = &[
    Source::Present(OperationalState, &["stats", "total_summons_handled"]),
    Source::Length(OperationalState, &["summon_responses"]),
];
pub const CROSSPOSTS: &[Source] = &[
    Source::Present(OperationalState, &["stats", "total_crossposts"]),
    Source::Length(OperationalState, &["crosspost", "history"]),
];
pub const USERS_SCANNED: &[Source] =
    &[Source::Length(OperationalState, &["acceleration", "scanned_users"])];
pub const RUNS: &[Source] = &[Source::Present(RunSummary, &["runs"])];
pub const TOKENS: &[Source] = &[Source::Present(RunSummary, &["total_tokens"])];
pub const HIGH_SCORE: &[Source] =
    &[Source::Present(OperationalState, &["acceleration", "high_score"])];

fn pick<'a>(document: Document, summary: &'a Value, state: &'a Value) -> &'a Value {
    match document {
        RunSummary => summary,
        OperationalState => state,
    }
}

pub fn resolve(chain: &[Source], summary: &Value, state: &Value) -> u64 {
    chain
        .iter()
        .find_map(|source| match *source {
            Source::Truthy(doc, path) => {
                count_at(pick(doc, summary, state), path).filter(|n| *n > 0)
            }
            Source::Present(doc, path) => count_at(pick(doc, summary, state), path),
            Source::Length(doc, path) => len_at(pick(doc, summary, state), path),
        })
        .unwrap_or(0)
}

/// Counters shown in the headline grid, except the flair-user total which
/// comes from the tier breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineMetrics {
    pub tldrs: u64,
    pub posts_processed: u64,
    pub comments_processed: u64,
    pub replies_sent: u64,
    pub summons_handled: u64,
    pub crossposts: u64,
    pub users_scanned: u64,
    pub runs: u64,
    pub tokens: u64,
    pub cost: f64,
    pub high_score: u64,
}

pub fn extract_metrics(summary: &Value, state: &Value) -> HeadlineMetrics {
    HeadlineMetrics {
        tldrs: resolve(TLDRS, summary, state),
        posts_processed: resolve(POSTS_PROCESSED, summary, state),
        comments_processed: resolve(COMMENTS_PROCESSED, summary, state),
        replies_sent: resolve(REPLIES_SENT, summary, state),
        summons_handled: resolve(SUMMONS_HANDLED, summary, state),
        crossposts: resolve(CROSSPOSTS, summary, state),
        users_scanned: resolve(USERS_SCANNED, summary, state),
        runs: resolve(RUNS, summary, state),
        tokens: resolve(TOKENS, summary, state),
        cost: number_at(summary, &["total_cost"]).unwrap_or(0.0),
        high_score: resolve(HIGH_SCORE, summary, state),
    }
}

pub fn is_human_moderator(name: &str, automation_account: &str) -> bool {
    !name.to_lowercase().ends_with("bot") && name != automation_account
}

pub fn human_moderator_count(state: &Value, automation_account: &str) -> usize {
    array_at(state, &["moderator_cache", "moderators"])
        .iter()
        .filter_map(Value::as_str)
        .filter(|name| is_human_moderator(name, automation_account))
        .count()
}
