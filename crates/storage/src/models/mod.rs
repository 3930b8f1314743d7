mod athlete;
mod event_type;
mod meet;
mod result;
mod user;

pub use athlete::Athlete;
pub use event_type::EventType;
pub use meet::Meet;
pub use result::RaceResult;
pub use user::User;
