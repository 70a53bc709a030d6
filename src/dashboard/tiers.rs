use crate::dashboard::documents::path_value;
use serde_json::Value;
use std::collections::BTreeMap;

pub const UNKNOWN_TIER: &str = "Unknown";

/// Display tiers, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    LightSpeed,
    Hypersonic,
    Supersonic,
    Speeding,
    Cruising,
    Crawling,
}

impl Tier {
    pub const RANKED: [Tier; 6] = [
        Tier::LightSpeed,
        Tier::Hypersonic,
        Tier::Supersonic,
        Tier::Speeding,
        Tier::Cruising,
        Tier::Crawling,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tier::LightSpeed => "Light-speed",
            Tier::Hypersonic => "Hypersonic",
            Tier::Supersonic => "Supersonic",
            Tier::Speeding => "Speeding",
            Tier::Cruising => "Cruising",
            Tier::Crawling => "Crawling",
        }
    }

    /// Flame palette, from white-blue core down to dark red.
    pub fn color(self) -> &'static str {
        match self {
            Tier::LightSpeed => "#bfdbfe",
            Tier::Hypersonic => "#fef08a",
            Tier::Supersonic => "#facc15",
            Tier::Speeding => "#f97316",
            Tier::Cruising => "#dc2626",
            Tier::Crawling => "#8b0000",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierBreakdown {
    pub counts: BTreeMap<String, u64>,
    pub total: u64,
}

impl TierBreakdown {
    /// Non-zero ranked tiers in display order. Unranked tiers are left out
    /// here but still counted in `total`.
    pub fn ranked(&self) -> Vec<(Tier, u64)> {
        Tier::RANKED
            .iter()
            .filter_map(|tier| {
                let count = self.counts.get(tier.name()).copied().unwrap_or(0);
                (count > 0).then_some((*tier, count))
            })
            .collect()
    }
}

pub fn classify(state: &Value) -> TierBreakdown {
    let mut breakdown = TierBreakdown::default();
    let Some(users) = path_value(state, &["acceleration", "opted_in_users"]).and_then(Value::as_object)
    else {
        return breakdown;
    };

    for entry in users.values() {
        if entry.get("enabled").and_then(Value::as_bool) != Some(true) {
            continue;
        }
        let tier = entry
            .get("tier")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TIER);
        *breakdown.counts.entry(tier.to_string()).or_insert(0) += 1;
        breakdown.total += 1;
    }
    breakdown
}
