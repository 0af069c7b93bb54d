pub mod advertisers;
pub mod content;
pub mod enums;
pub mod forms;
pub mod plans;
pub mod postings;
pub mod submissions;
