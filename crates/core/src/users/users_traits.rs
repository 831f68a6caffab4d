use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::totals::FinancialTotals;
use crate::users::users_model::{
    FinancialField, FinancialProfileUpdate, NewUser, User, UserUpdate,
};

/// Repository trait for user profile storage.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Looks up a user by id. `None` when no user matches.
    async fn get_by_id(&self, user_id: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn insert(&self, new_user: NewUser) -> Result<User>;

    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    async fn update_financial_profile(
        &self,
        user_id: &str,
        update: FinancialProfileUpdate,
    ) -> Result<User>;

    /// Persists the freshly computed snapshot onto the user's profile.
    /// Called by the aggregator after every recomputation.
    async fn save_totals(&self, user_id: &str, totals: &FinancialTotals) -> Result<()>;
}

/// Trait for user service operations.
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Loads a user, failing with `UserNotFound` when the id matches nothing.
    async fn get_user(&self, user_id: &str) -> Result<User>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn register_user(&self, new_user: NewUser) -> Result<User>;

    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User>;

    async fn update_financial_data(
        &self,
        user_id: &str,
        update: FinancialProfileUpdate,
    ) -> Result<User>;

    async fn patch_financial_field(
        &self,
        user_id: &str,
        field: FinancialField,
        value: Decimal,
    ) -> Result<User>;
}
