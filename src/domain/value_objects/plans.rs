use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Duration and posting quota attached to a plan tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTerms {
    pub duration_months: u32,
    pub posting_limit: i64,
}

/// Terms applied to a plan string that is not in the tier table.
pub const UNKNOWN_PLAN_TERMS: PlanTerms = PlanTerms {
    duration_months: 0,
    posting_limit: 0,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlanTier {
    #[serde(rename = "1_month")]
    OneMonth,
    #[serde(rename = "3_months")]
    ThreeMonths,
    #[serde(rename = "6_months")]
    SixMonths,
    #[serde(rename = "12_months")]
    TwelveMonths,
}

/// The only place plan identifiers, durations and limits are defined.
const PLAN_TIERS: [(PlanTier, &str, PlanTerms); 4] = [
    (
        PlanTier::OneMonth,
        "1_month",
        PlanTerms {
            duration_months: 1,
            posting_limit: 5,
        },
    ),
    (
        PlanTier::ThreeMonths,
        "3_months",
        PlanTerms {
            duration_months: 3,
            posting_limit: 12,
        },
    ),
    (
        PlanTier::SixMonths,
        "6_months",
        PlanTerms {
            duration_months: 6,
            posting_limit: 25,
        },
    ),
    (
        PlanTier::TwelveMonths,
        "12_months",
        PlanTerms {
            duration_months: 12,
            posting_limit: 50,
        },
    ),
];

impl PlanTier {
    pub fn all() -> impl Iterator<Item = PlanTier> {
        PLAN_TIERS.iter().map(|(tier, _, _)| *tier)
    }

    pub fn as_str(&self) -> &'static str {
        PLAN_TIERS
            .iter()
            .find(|(tier, _, _)| tier == self)
            .map(|(_, name, _)| *name)
            .unwrap_or_default()
    }

    pub fn terms(&self) -> PlanTerms {
        PLAN_TIERS
            .iter()
            .find(|(tier, _, _)| tier == self)
            .map(|(_, _, terms)| *terms)
            .unwrap_or(UNKNOWN_PLAN_TERMS)
    }
}

impl Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        PLAN_TIERS
            .iter()
            .find(|(_, name, _)| *name == raw)
            .map(|(tier, _, _)| *tier)
            .ok_or_else(|| anyhow::anyhow!("unknown plan: {}", raw))
    }
}

/// Terms for a stored plan string. Unknown plans get zero duration and zero quota.
pub fn plan_terms(plan: &str) -> PlanTerms {
    plan.parse::<PlanTier>()
        .map(|tier| tier.terms())
        .unwrap_or(UNKNOWN_PLAN_TERMS)
}

/// Steps 1-4 of plan resolution: limits and expiry without any account checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSnapshot {
    pub plan: String,
    pub duration_months: u32,
    pub expiry_date: DateTime<Utc>,
    pub expired: bool,
    pub posting_limit: i64,
    pub active_posting_count: i64,
    pub remaining_posts: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResolution {
    pub expiry_date: DateTime<Utc>,
    pub posting_limit: i64,
    pub active_posting_count: i64,
    pub remaining_posts: i64,
}

impl From<PlanSnapshot> for PlanResolution {
    fn from(value: PlanSnapshot) -> Self {
        Self {
            expiry_date: value.expiry_date,
            posting_limit: value.posting_limit,
            active_posting_count: value.active_posting_count,
            remaining_posts: value.remaining_posts,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanCatalogEntry {
    pub plan: PlanTier,
    pub duration_months: u32,
    pub posting_limit: i64,
}

pub fn plan_catalog() -> Vec<PlanCatalogEntry> {
    PlanTier::all()
        .map(|plan| {
            let terms = plan.terms();
            PlanCatalogEntry {
                plan,
                duration_months: terms.duration_months,
                posting_limit: terms.posting_limit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_plans_resolve_to_fixed_terms() {
        let expected = [
            ("1_month", 1, 5),
            ("3_months", 3, 12),
            ("6_months", 6, 25),
            ("12_months", 12, 50),
        ];

        for (plan, months, limit) in expected {
            let terms = plan_terms(plan);
            assert_eq!(terms.duration_months, months, "{plan}");
            assert_eq!(terms.posting_limit, limit, "{plan}");
        }
    }

    #[test]
    fn unknown_plan_resolves_to_zero_terms() {
        assert_eq!(plan_terms("lifetime"), UNKNOWN_PLAN_TERMS);
        assert_eq!(plan_terms(""), UNKNOWN_PLAN_TERMS);
    }

    #[test]
    fn tier_names_round_trip_through_serde() {
        for tier in PlanTier::all() {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.as_str()));
            assert_eq!(tier.as_str().parse::<PlanTier>().unwrap(), tier);
        }
    }

    #[test]
    fn catalog_lists_every_tier_in_order() {
        let catalog = plan_catalog();
        let limits: Vec<i64> = catalog.iter().map(|entry| entry.posting_limit).collect();
        assert_eq!(limits, vec![5, 12, 25, 50]);
    }
}
