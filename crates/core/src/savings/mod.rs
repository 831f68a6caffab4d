//! Savings module - savings goal models, services, and traits.

mod savings_model;
mod savings_service;
mod savings_traits;

pub use savings_model::{NewSavingsGoal, SavingsCategory, SavingsGoal, SavingsGoalUpdate, SavingsSums};
pub use savings_service::SavingsService;
pub use savings_traits::{SavingsRepositoryTrait, SavingsServiceTrait};
