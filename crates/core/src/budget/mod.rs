//! Event budgets and budget-vs-actual variance.

pub mod service;
pub mod types;
pub mod variance;


pub use service::BudgetService;
pub use types::{Budget, BudgetCategory, BudgetStatus, Contingency};
pub use variance::{BudgetVariance, VarianceType};
