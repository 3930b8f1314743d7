pub mod athlete;
pub mod event_type;
pub mod meet;
pub mod result;
pub mod user;
