use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Who a posting is attributed to. Only `Agent` postings count against a plan.
#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PosterType {
    #[default]
    Admin,
    Agent,
}

impl Display for PosterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let poster_type = match self {
            PosterType::Admin => "Admin",
            PosterType::Agent => "Agent",
        };
        write!(f, "{}", poster_type)
    }
}

impl FromStr for PosterType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(PosterType::Admin),
            "agent" => Ok(PosterType::Agent),
            other => Err(anyhow::anyhow!("unknown poster type: {}", other)),
        }
    }
}
