use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use log::{debug, error};

use super::totals_calculator::TotalsCalculator;
use super::totals_model::FinancialTotals;
use super::totals_traits::{TotalsServiceTrait, TotalsSource};
use crate::constants::STALENESS_WINDOW_SECS;
use crate::errors::{Error, Result};
use crate::events::{totals_topic, EventBus};
use crate::users::UserRepositoryTrait;

/// Read-through cache over the totals calculator, plus the change notifier
/// that pushes fresh snapshots to subscribers.
///
/// Cache entries live for the process lifetime and are overwritten on every
/// recomputation. Two concurrent misses for the same user may both trigger a
/// recompute; the recompute is idempotent, so the last overwrite wins.
pub struct TotalsService {
    calculator: TotalsCalculator,
    user_repository: Arc<dyn UserRepositoryTrait>,
    event_bus: EventBus,
    cache: DashMap<String, FinancialTotals>,
    staleness_window: Duration,
}

impl TotalsService {
    pub fn new(
        calculator: TotalsCalculator,
        user_repository: Arc<dyn UserRepositoryTrait>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            calculator,
            user_repository,
            event_bus,
            cache: DashMap::new(),
            staleness_window: Duration::seconds(STALENESS_WINDOW_SECS),
        }
    }

    /// Overrides the staleness window; used by tests and tuning.
    pub fn with_staleness_window(mut self, window: Duration) -> Self {
        self.staleness_window = window;
        self
    }

    /// Stores a snapshot, keeping `last_calculated` monotonically
    /// non-decreasing per user even if the wall clock steps backwards.
    fn store_snapshot(&self, user_id: &str, mut totals: FinancialTotals) -> FinancialTotals {
        let previous = self.cache.get(user_id).map(|entry| entry.last_calculated);
        if let Some(previous) = previous {
            if totals.last_calculated < previous {
                totals.last_calculated = previous;
            }
        }
        self.cache.insert(user_id.to_string(), totals.clone());
        totals
    }

    fn publish(&self, user_id: &str, totals: &FinancialTotals) {
        match serde_json::to_value(totals) {
            Ok(payload) => self.event_bus.publish(totals_topic(user_id), payload),
            // Totals remain available via pull; publish failure is logged only.
            Err(e) => error!(
                "Failed to serialize totals snapshot for user {}: {}",
                user_id, e
            ),
        }
    }
}

#[async_trait]
impl TotalsServiceTrait for TotalsService {
    async fn get_totals(&self, user_id: &str) -> Result<FinancialTotals> {
        let now = Utc::now();

        if let Some(entry) = self.cache.get(user_id) {
            if !entry.is_stale(now, self.staleness_window) {
                return Ok(entry.value().clone());
            }
        }

        // On an in-memory miss, the durable mirror on the profile may still
        // be fresh (e.g. right after a restart); seed the map from it.
        let user = self
            .user_repository
            .get_by_id(user_id)
            .await?
            .ok_or_else(|| Error::UserNotFound(user_id.to_string()))?;
        if let Some(mirrored) = user.financial_profile.totals {
            if !mirrored.is_stale(now, self.staleness_window) {
                debug!("Seeding totals cache for user {} from profile mirror", user_id);
                return Ok(self.store_snapshot(user_id, mirrored));
            }
        }

        let totals = self.calculator.compute(user_id).await?;
        Ok(self.store_snapshot(user_id, totals))
    }

    async fn notify_changed(&self, user_id: &str) -> Result<FinancialTotals> {
        let totals = self.calculator.compute(user_id).await?;
        let totals = self.store_snapshot(user_id, totals);
        self.publish(user_id, &totals);
        Ok(totals)
    }
}

#[async_trait]
impl TotalsSource for TotalsService {
    async fn fetch_totals(&self, user_id: &str) -> Result<FinancialTotals> {
        self.get_totals(user_id).await
    }
}
