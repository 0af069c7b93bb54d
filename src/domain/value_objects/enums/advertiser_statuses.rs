use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AdvertiserStatus {
    #[default]
    Pending,
    Active,
    Suspended,
}

impl Display for AdvertiserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            AdvertiserStatus::Pending => "pending",
            AdvertiserStatus::Active => "active",
            AdvertiserStatus::Suspended => "suspended",
        };
        write!(f, "{}", status)
    }
}

impl FromStr for AdvertiserStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AdvertiserStatus::Pending),
            "active" => Ok(AdvertiserStatus::Active),
            "suspended" => Ok(AdvertiserStatus::Suspended),
            other => Err(anyhow::anyhow!("unknown advertiser status: {}", other)),
        }
    }
}
