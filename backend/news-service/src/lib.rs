/// News Service Library
///
/// Partial updates and listing over a persisted collection of news items.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: stored record, patch payload and response shapes
/// - `services`: merge rules, listing projection and store-backed operations
/// - `db`: store contract and its MySQL / in-memory implementations
/// - `error`: error taxonomy and HTTP mapping
/// - `config`: configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
