use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Form-only collections. Each kind is stored as a JSON document in `submissions`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionKind {
    JobApplication,
    EmployerRegistration,
    LogisticsRequest,
    ArtisanRequest,
    ArtisanJoin,
    Feedback,
    ShopRequest,
}

impl SubmissionKind {
    pub const ALL: [SubmissionKind; 7] = [
        SubmissionKind::JobApplication,
        SubmissionKind::EmployerRegistration,
        SubmissionKind::LogisticsRequest,
        SubmissionKind::ArtisanRequest,
        SubmissionKind::ArtisanJoin,
        SubmissionKind::Feedback,
        SubmissionKind::ShopRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionKind::JobApplication => "job_application",
            SubmissionKind::EmployerRegistration => "employer_registration",
            SubmissionKind::LogisticsRequest => "logistics_request",
            SubmissionKind::ArtisanRequest => "artisan_request",
            SubmissionKind::ArtisanJoin => "artisan_join",
            SubmissionKind::Feedback => "feedback",
            SubmissionKind::ShopRequest => "shop_request",
        }
    }

    /// Form fields that must be present and non-blank for the kind.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            SubmissionKind::JobApplication => &["fullName", "email", "phone"],
            SubmissionKind::EmployerRegistration => &["companyName", "contactName", "email", "phone"],
            SubmissionKind::LogisticsRequest => {
                &["fullName", "phone", "pickupAddress", "deliveryAddress"]
            }
            SubmissionKind::ArtisanRequest => &["fullName", "phone", "serviceType", "address"],
            SubmissionKind::ArtisanJoin => &["fullName", "phone", "trade"],
            SubmissionKind::Feedback => &["name", "message"],
            SubmissionKind::ShopRequest => &["fullName", "phone", "items"],
        }
    }
}

impl Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        SubmissionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| anyhow::anyhow!("unknown submission kind: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_style_kinds() {
        assert_eq!(
            "job-application".parse::<SubmissionKind>().unwrap(),
            SubmissionKind::JobApplication
        );
        assert_eq!(
            "artisan_join".parse::<SubmissionKind>().unwrap(),
            SubmissionKind::ArtisanJoin
        );
        assert!("newsletter".parse::<SubmissionKind>().is_err());
    }

    #[test]
    fn every_kind_requires_a_contact_field() {
        for kind in SubmissionKind::ALL {
            let fields = kind.required_fields();
            assert!(
                kind == SubmissionKind::Feedback
                    || fields.contains(&"phone")
                    || fields.contains(&"email"),
                "{kind} has no contact field"
            );
        }
    }
}
