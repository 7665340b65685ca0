// User domain module
// Users only exist inside a team; see domain::team for the aggregate root

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::User;
pub use value_objects::UserId;
