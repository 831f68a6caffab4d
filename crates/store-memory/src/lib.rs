//! In-memory implementation of the finpulse-core repository traits.
//!
//! Rows live in per-user vectors inside `DashMap`s for the process lifetime.
//! Soft deletes flip the row's active flag; rows are never removed, so
//! history stays queryable while aggregation excludes inactive rows.

mod debts;
mod emis;
mod expenses;
mod savings;
mod users;

pub use debts::InMemoryDebtRepository;
pub use emis::InMemoryEmiRepository;
pub use expenses::InMemoryExpenseRepository;
pub use savings::InMemorySavingsRepository;
pub use users::InMemoryUserRepository;
