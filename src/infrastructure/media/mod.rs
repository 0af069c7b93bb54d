pub mod hosted_media;
