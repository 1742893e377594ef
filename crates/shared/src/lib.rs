//! Shared types, errors, and configuration for Jamii.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management, including the event finance policy

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CategoryPriority, CategoryShare, FinancePolicy, ServerConfig};
pub use error::{AppError, AppResult};
