pub mod credentials;
pub mod usecases;
