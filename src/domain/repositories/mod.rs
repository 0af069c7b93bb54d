pub mod admin_settings;
pub mod advertisers;
pub mod content;
pub mod job_postings;
pub mod media;
pub mod properties;
pub mod submissions;
