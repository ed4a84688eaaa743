//! Shared types, errors, and configuration for Polyglot.
//!
//! This crate provides common types used across all other crates:
//! - Money types with integer minor units
//! - Language entries for the supported language list
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, I18nConfig, RatesConfig, ServerConfig};
pub use error::{AppError, AppResult};
