use async_trait::async_trait;

use crate::errors::Result;
use crate::totals::totals_model::FinancialTotals;

/// Trait for the totals cache/notification service.
#[async_trait]
pub trait TotalsServiceTrait: Send + Sync {
    /// Returns the user's totals, served from cache when fresh.
    async fn get_totals(&self, user_id: &str) -> Result<FinancialTotals>;

    /// Forces an immediate recompute (bypassing staleness), stores the fresh
    /// snapshot, and publishes it on the user's push topic. Invoked after
    /// every mutation to the user's records or profile.
    async fn notify_changed(&self, user_id: &str) -> Result<FinancialTotals>;
}

/// Pull seam the client-side store refreshes through. Server-side this is
/// the totals service itself; a remote client wires an HTTP fetch here.
#[async_trait]
pub trait TotalsSource: Send + Sync {
    async fn fetch_totals(&self, user_id: &str) -> Result<FinancialTotals>;
}
