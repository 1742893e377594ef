//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface over the in-memory store,
//! hiding locking details from the rest of the application.

pub mod finance;

pub use finance::FinanceRepository;
