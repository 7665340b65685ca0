// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

use std::sync::Arc;

use crate::domain::repositories::TeamRepository;

pub mod errors;
pub mod handlers;
pub mod routes;

pub use routes::router;

/// Registry handle shared by all handlers
pub type SharedRegistry = Arc<dyn TeamRepository>;
