//! # Actix Middleware Library
//!
//! Shared middleware for the news Actix services
//!
//! ## Modules
//! - `recovery`: converts handler panics into generic 500 responses

pub mod recovery;

pub use recovery::{Recovery, RECOVERED_ERROR_MESSAGE};
