use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Reviewed,
    Contacted,
    Closed,
}

impl Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            SubmissionStatus::New => "new",
            SubmissionStatus::Reviewed => "reviewed",
            SubmissionStatus::Contacted => "contacted",
            SubmissionStatus::Closed => "closed",
        };
        write!(f, "{}", status)
    }
}

impl FromStr for SubmissionStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(SubmissionStatus::New),
            "reviewed" => Ok(SubmissionStatus::Reviewed),
            "contacted" => Ok(SubmissionStatus::Contacted),
            "closed" => Ok(SubmissionStatus::Closed),
            other => Err(anyhow::anyhow!("unknown submission status: {}", other)),
        }
    }
}
