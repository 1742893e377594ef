//! Financial summaries and reports.
//!
//! This module provides pure business logic for:
//! - Event financial summaries (fundraising, budget, expenditures, profit/loss)
//! - Budget-vs-actual variance per category
//! - Rule-based insights
//! - Report assembly

pub mod insights;
pub mod service;
pub mod types;


pub use insights::InsightService;
pub use service::{ReportService, SummaryService};
pub use types::*;
