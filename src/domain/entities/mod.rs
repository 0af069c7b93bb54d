pub mod advertisers;
pub mod announcements;
pub mod job_postings;
pub mod properties;
pub mod shop_products;
pub mod submissions;
pub mod trainings;
