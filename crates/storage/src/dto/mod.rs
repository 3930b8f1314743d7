pub mod athlete;
pub mod auth;
pub mod event_type;
pub mod meet;
pub mod result;
