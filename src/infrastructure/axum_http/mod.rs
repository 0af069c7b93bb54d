pub mod admin_session;
pub mod default_routers;
pub mod error_responses;
pub mod http_serve;
pub mod multipart_form;
pub mod routers;
