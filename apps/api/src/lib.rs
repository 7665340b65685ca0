//! Steps Leaderboard API Library
//!
//! This library provides the core functionality for the Steps Leaderboard API:
//! the in-memory team registry, its HTTP adapter, and process setup.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
