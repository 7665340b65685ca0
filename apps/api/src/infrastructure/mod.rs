// Infrastructure layer module
// Contains storage adapters and process-level setup
// Follows Hexagonal Architecture

pub mod logging;
pub mod repositories;
