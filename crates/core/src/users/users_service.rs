use log::debug;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::users_model::{FinancialField, FinancialProfileUpdate, NewUser, User, UserUpdate};
use super::users_traits::{UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, DomainEventSink};

/// Service for managing user profiles.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepositoryTrait>, event_sink: Arc<dyn DomainEventSink>) -> Self {
        Self {
            repository,
            event_sink,
        }
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repository.find_by_email(email).await
    }

    async fn register_user(&self, new_user: NewUser) -> Result<User> {
        new_user.validate()?;

        if self.repository.find_by_email(&new_user.email).await?.is_some() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "email already registered".to_string(),
            )));
        }

        debug!("Registering user with email {}", new_user.email);
        self.repository.insert(new_user).await
    }

    /// Updates profile fields. A salary change affects the resolved income,
    /// so a ProfileChanged event is emitted for totals recomputation.
    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        let user = self.repository.update_profile(user_id, update).await?;
        self.event_sink.emit(DomainEvent::profile_changed(user_id));
        Ok(user)
    }

    async fn update_financial_data(
        &self,
        user_id: &str,
        update: FinancialProfileUpdate,
    ) -> Result<User> {
        let user = self
            .repository
            .update_financial_profile(user_id, update)
            .await?;
        self.event_sink.emit(DomainEvent::profile_changed(user_id));
        Ok(user)
    }

    async fn patch_financial_field(
        &self,
        user_id: &str,
        field: FinancialField,
        value: Decimal,
    ) -> Result<User> {
        self.update_financial_data(user_id, field.into_update(value))
            .await
    }
}
