//! Recorded spending against an event.

pub mod types;

pub use types::{Expenditure, ExpenditureStatus, NewExpenditure};
