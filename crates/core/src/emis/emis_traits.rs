use async_trait::async_trait;

use crate::emis::emis_model::{Emi, EmiStats, EmiSums, NewEmi};
use crate::errors::Result;

/// Repository trait for EMI storage.
///
/// Deletion is soft: `deactivate` flips the row's active flag, the row stays
/// behind for history. Sums cover active rows only and return zero sums when
/// no rows match.
#[async_trait]
pub trait EmiRepositoryTrait: Send + Sync {
    async fn list(&self, user_id: &str) -> Result<Vec<Emi>>;
    async fn insert(&self, user_id: &str, new_emi: NewEmi) -> Result<Emi>;
    async fn deactivate(&self, user_id: &str, emi_id: &str) -> Result<Emi>;
    async fn sum_active(&self, user_id: &str) -> Result<EmiSums>;
}

/// Trait for EMI service operations.
#[async_trait]
pub trait EmiServiceTrait: Send + Sync {
    async fn get_emis(&self, user_id: &str) -> Result<Vec<Emi>>;
    async fn add_emi(&self, user_id: &str, new_emi: NewEmi) -> Result<Emi>;
    async fn delete_emi(&self, user_id: &str, emi_id: &str) -> Result<Emi>;
    async fn get_stats(&self, user_id: &str) -> Result<EmiStats>;
}
