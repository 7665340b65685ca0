// HTTP handlers, one module per resource

pub mod health;
pub mod teams;
pub mod users;
