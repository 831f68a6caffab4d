//! Debts module - debt models, services, and traits.

mod debts_model;
mod debts_service;
mod debts_traits;

pub use debts_model::{Debt, NewDebt};
pub use debts_service::DebtService;
pub use debts_traits::{DebtRepositoryTrait, DebtServiceTrait};
