use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostingStatus {
    #[default]
    Active,
    Inactive,
    Filled,
    Sold,
}

impl Display for PostingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            PostingStatus::Active => "active",
            PostingStatus::Inactive => "inactive",
            PostingStatus::Filled => "filled",
            PostingStatus::Sold => "sold",
        };
        write!(f, "{}", status)
    }
}

impl FromStr for PostingStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(PostingStatus::Active),
            "inactive" => Ok(PostingStatus::Inactive),
            "filled" => Ok(PostingStatus::Filled),
            "sold" => Ok(PostingStatus::Sold),
            other => Err(anyhow::anyhow!("unknown posting status: {}", other)),
        }
    }
}
