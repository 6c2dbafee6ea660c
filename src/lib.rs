//! Movie catalog service
//!
//! REST API over a relational catalog of movies, actors and genres. Reads
//! return movies enriched with their cast and genres; writes manage actors
//! and their participations in movies.

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod services;

pub use app::{AppState, build_app};
