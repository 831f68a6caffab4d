//! Bridges core domain events to totals recomputation and push publication.
//!
//! Core services emit events synchronously through the sink; the worker
//! drains them off the request path, so mutation responses return before or
//! concurrently with the recompute-and-publish cycle.

use std::sync::Arc;

use tokio::sync::mpsc;

use finpulse_core::events::{DomainEvent, DomainEventSink};
use finpulse_core::totals::{TotalsService, TotalsServiceTrait};

/// Sink implementation that forwards events to the worker channel.
#[derive(Clone)]
pub struct ChannelDomainEventSink {
    sender: mpsc::UnboundedSender<DomainEvent>,
}

impl ChannelDomainEventSink {
    pub fn new(sender: mpsc::UnboundedSender<DomainEvent>) -> Self {
        Self { sender }
    }
}

impl DomainEventSink for ChannelDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if self.sender.send(event).is_err() {
            tracing::warn!("Domain event dropped: totals worker not running");
        }
    }
}

/// Drains domain events and runs one recompute-and-publish cycle per event.
///
/// Recomputation failures are logged and never surface to the mutation that
/// triggered them; totals stay reachable through the pull endpoint.
pub async fn totals_update_worker(
    mut rx: mpsc::UnboundedReceiver<DomainEvent>,
    totals_service: Arc<TotalsService>,
) {
    tracing::info!("Totals update worker started");
    while let Some(event) = rx.recv().await {
        let user_id = event.user_id().to_string();
        if let Err(err) = totals_service.notify_changed(&user_id).await {
            tracing::error!("Totals recomputation for user {} failed: {}", user_id, err);
        }
    }
    tracing::info!("Totals update worker shutting down");
}
