//! EMIs module - loan installment models, services, and traits.

mod emis_model;
mod emis_service;
mod emis_traits;

pub use emis_model::{monthly_payment, Emi, EmiStats, EmiSums, LoanType, NewEmi};
pub use emis_service::EmiService;
pub use emis_traits::{EmiRepositoryTrait, EmiServiceTrait};

#[cfg(test)]
mod emis_model_tests;
