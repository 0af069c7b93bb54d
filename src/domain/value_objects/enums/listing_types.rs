use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    #[default]
    Sale,
    Rent,
    Lease,
    Shortlet,
}

impl Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listing_type = match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
            ListingType::Lease => "lease",
            ListingType::Shortlet => "shortlet",
        };
        write!(f, "{}", listing_type)
    }
}

impl FromStr for ListingType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sale" => Ok(ListingType::Sale),
            "rent" => Ok(ListingType::Rent),
            "lease" => Ok(ListingType::Lease),
            "shortlet" | "short-let" => Ok(ListingType::Shortlet),
            other => Err(anyhow::anyhow!("unknown listing type: {}", other)),
        }
    }
}
