//! Core business logic for Jamii event finances.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `amount` - Bounds on accepted money amounts
//! - `event` - The slice of an event the finance service reads
//! - `fundraising` - Donation campaigns and per-method breakdowns
//! - `budget` - Default category allocation and variance analysis
//! - `expenditure` - Recorded spending against an event
//! - `reports` - Financial summaries, insights, and reports

pub mod amount;
pub mod budget;
pub mod error;
pub mod event;
pub mod expenditure;
pub mod fundraising;
pub mod ratio;
pub mod reports;

pub use error::FinanceError;
