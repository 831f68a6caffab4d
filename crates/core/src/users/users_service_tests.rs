#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::events::{DomainEvent, MockDomainEventSink};
    use crate::totals::FinancialTotals;
    use crate::users::{
        FinancialField, FinancialProfile, FinancialProfileUpdate, NewUser, User,
        UserRepositoryTrait, UserService, UserServiceTrait, UserUpdate,
    };
    use async_trait::async_trait;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct MockUserRepository {
        users: Arc<Mutex<Vec<User>>>,
    }

    #[async_trait]
    impl UserRepositoryTrait for MockUserRepository {
        async fn get_by_id(&self, user_id: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == user_id)
                .cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn insert(&self, new_user: NewUser) -> Result<User> {
            let user = User {
                id: format!("u{}", self.users.lock().unwrap().len() + 1),
                name: new_user.name,
                email: new_user.email,
                mobile: new_user.mobile,
                occupation: new_user.occupation,
                salary: new_user.salary,
                password_hash: new_user.password_hash,
                financial_profile: FinancialProfile::default(),
                created_at: Utc::now(),
            };
            self.users.lock().unwrap().push(user.clone());
            Ok(user)
        }

        async fn update_profile(&self, user_id: &str, update: UserUpdate) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .expect("user present in fixture");
            if let Some(name) = update.name {
                user.name = name;
            }
            if let Some(salary) = update.salary {
                user.salary = salary;
            }
            Ok(user.clone())
        }

        async fn update_financial_profile(
            &self,
            user_id: &str,
            update: FinancialProfileUpdate,
        ) -> Result<User> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.id == user_id)
                .expect("user present in fixture");
            if let Some(value) = update.monthly_income {
                user.financial_profile.monthly_income = value;
            }
            if let Some(value) = update.total_savings {
                user.financial_profile.total_savings = value;
            }
            Ok(user.clone())
        }

        async fn save_totals(&self, _user_id: &str, _totals: &FinancialTotals) -> Result<()> {
            Ok(())
        }
    }

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Ravi".to_string(),
            email: email.to_string(),
            mobile: None,
            occupation: None,
            salary: dec!(7000),
            password_hash: "hash".to_string(),
        }
    }

    fn build_service() -> (UserService, MockDomainEventSink) {
        let sink = MockDomainEventSink::new();
        let service = UserService::new(
            Arc::new(MockUserRepository::default()),
            Arc::new(sink.clone()),
        );
        (service, sink)
    }

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() {
        let (service, _sink) = build_service();
        service.register_user(new_user("ravi@example.com")).await.unwrap();

        let err = service
            .register_user(new_user("ravi@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_user_maps_missing_to_user_not_found() {
        let (service, _sink) = build_service();
        let err = service.get_user("missing").await.unwrap_err();
        assert!(matches!(err, Error::UserNotFound(_)));
    }

    #[tokio::test]
    async fn test_profile_update_emits_profile_changed() {
        let (service, sink) = build_service();
        let user = service.register_user(new_user("a@example.com")).await.unwrap();

        service
            .update_profile(
                &user.id,
                UserUpdate {
                    salary: Some(dec!(9000)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], DomainEvent::ProfileChanged { user_id } if user_id == &user.id));
    }

    #[tokio::test]
    async fn test_patch_financial_field_expands_to_single_field_update() {
        let (service, sink) = build_service();
        let user = service.register_user(new_user("b@example.com")).await.unwrap();

        let updated = service
            .patch_financial_field(&user.id, FinancialField::MonthlyIncome, dec!(4200))
            .await
            .unwrap();

        assert_eq!(updated.financial_profile.monthly_income, dec!(4200));
        assert_eq!(updated.financial_profile.total_savings, dec!(0));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_financial_field_parses_wire_names() {
        use std::str::FromStr;
        assert_eq!(
            FinancialField::from_str("totalEMI").unwrap(),
            FinancialField::TotalEmi
        );
        assert_eq!(
            FinancialField::from_str("monthlyIncome").unwrap(),
            FinancialField::MonthlyIncome
        );
        assert!(FinancialField::from_str("badField").is_err());
    }
}
