//! In-memory storage layer for event finances.
//!
//! This crate provides:
//! - `FinanceStore`, the keyed collections for campaigns, budgets, and expenditures
//! - `FinanceRepository`, which runs every finance operation against the store

pub mod repositories;
pub mod store;

pub use repositories::FinanceRepository;
pub use store::FinanceStore;
