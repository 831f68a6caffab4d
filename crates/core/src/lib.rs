//! Finpulse Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Finpulse: the per-user
//! record collections (EMIs, expenses, debts, savings goals), the user
//! profile, and the totals aggregation/caching/notification subsystem.
//! It is storage-agnostic and defines repository traits that are implemented
//! by the `store-memory` crate (or any other storage backend).

pub mod constants;
pub mod debts;
pub mod emis;
pub mod errors;
pub mod events;
pub mod expenses;
pub mod savings;
pub mod totals;
pub mod users;
pub mod utils;

// Re-export common types from the totals module
pub use totals::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
