use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use finpulse_core::errors::{Result, StoreError};
use finpulse_core::totals::FinancialTotals;
use finpulse_core::users::{
    FinancialProfile, FinancialProfileUpdate, NewUser, User, UserRepositoryTrait, UserUpdate,
};

/// In-memory user profile store keyed by user id.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.users.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone()))
    }

    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            mobile: new_user.mobile,
            occupation: new_user.occupation,
            salary: new_user.salary,
            password_hash: new_user.password_hash,
            financial_profile: FinancialProfile::default(),
            created_at: Utc::now(),
        };
        self.users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
        let mut entry = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;
        if let Some(name) = update.name {
            entry.name = name;
        }
        if let Some(mobile) = update.mobile {
            entry.mobile = Some(mobile);
        }
        if let Some(occupation) = update.occupation {
            entry.occupation = Some(occupation);
        }
        if let Some(salary) = update.salary {
            entry.salary = salary;
        }
        Ok(entry.value().clone())
    }

    async fn update_financial_profile(
        &self,
        user_id: &str,
        update: FinancialProfileUpdate,
    ) -> Result<User> {
        let mut entry = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;
        let profile = &mut entry.financial_profile;
        if let Some(value) = update.monthly_income {
            profile.monthly_income = value;
        }
        if let Some(value) = update.total_expense {
            profile.total_expense = value;
        }
        if let Some(value) = update.total_emi {
            profile.total_emi = value;
        }
        if let Some(value) = update.total_debt {
            profile.total_debt = value;
        }
        if let Some(value) = update.total_savings {
            profile.total_savings = value;
        }
        profile.last_updated = Some(Utc::now());
        Ok(entry.value().clone())
    }

    async fn save_totals(&self, user_id: &str, totals: &FinancialTotals) -> Result<()> {
        let mut entry = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::NotFound(format!("user {}", user_id)))?;
        entry.financial_profile.totals = Some(totals.clone());
        entry.financial_profile.last_updated = Some(totals.last_calculated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Meera".to_string(),
            email: email.to_string(),
            mobile: None,
            occupation: None,
            salary: dec!(6000),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("m@example.com")).await.unwrap();

        assert_eq!(
            repo.get_by_id(&user.id).await.unwrap().unwrap().email,
            "m@example.com"
        );
        assert!(repo
            .find_by_email("m@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(repo.get_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_financial_profile_update_touches_only_given_fields() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("m@example.com")).await.unwrap();

        let updated = repo
            .update_financial_profile(
                &user.id,
                FinancialProfileUpdate {
                    monthly_income: Some(dec!(7500)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.financial_profile.monthly_income, dec!(7500));
        assert_eq!(updated.financial_profile.total_debt, dec!(0));
        assert!(updated.financial_profile.last_updated.is_some());
    }
}
