pub mod advertiser_statuses;
pub mod listing_types;
pub mod poster_types;
pub mod posting_statuses;
pub mod submission_kinds;
pub mod submission_statuses;
