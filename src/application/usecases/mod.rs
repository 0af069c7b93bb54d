pub mod admin_auth;
pub mod advertisers;
pub mod content;
pub mod dashboard;
pub mod plan_resolver;
pub mod postings;
pub mod submissions;
pub mod uploads;
