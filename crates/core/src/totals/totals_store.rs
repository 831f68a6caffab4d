use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use log::{debug, error, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::totals_model::FinancialTotals;
use super::totals_traits::TotalsSource;
use crate::events::{totals_topic, PushEvent};

type Listener = Arc<dyn Fn(&FinancialTotals) + Send + Sync>;
type ListenerRegistry = Arc<Mutex<Vec<(u64, Listener)>>>;

/// Client-side observable store for one user's totals.
///
/// Holds the last known snapshot, a listener registry, and a connection to
/// the push channel. Constructed once per client session and dependency-
/// injected into whatever UI code needs it; `init`, `subscribe`, `refresh`,
/// and `destroy` define its lifecycle.
pub struct TotalsStore {
    user_id: String,
    source: Arc<dyn TotalsSource>,
    totals: Mutex<Option<FinancialTotals>>,
    listeners: ListenerRegistry,
    next_listener_id: AtomicU64,
    connected: AtomicBool,
    destroyed: AtomicBool,
    push_task: Mutex<Option<JoinHandle<()>>>,
}

impl TotalsStore {
    pub fn new(user_id: impl Into<String>, source: Arc<dyn TotalsSource>) -> Arc<Self> {
        Arc::new(Self {
            user_id: user_id.into(),
            source,
            totals: Mutex::new(None),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_listener_id: AtomicU64::new(0),
            connected: AtomicBool::new(false),
            destroyed: AtomicBool::new(false),
            push_task: Mutex::new(None),
        })
    }

    /// Connects the push transport and pulls the current snapshot. A client
    /// that connects after a publish sees only the next one, so the initial
    /// pull seeds the store.
    pub async fn init(self: &Arc<Self>, receiver: broadcast::Receiver<PushEvent>) {
        self.connect(receiver);
        self.refresh().await;
    }

    /// Starts the push-listening task for this store's user topic.
    pub fn connect(self: &Arc<Self>, mut receiver: broadcast::Receiver<PushEvent>) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }

        let store = Arc::downgrade(self);
        let topic = totals_topic(&self.user_id);
        let handle = tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) if event.topic == topic => {
                        let Some(store) = store.upgrade() else { break };
                        match serde_json::from_value::<FinancialTotals>(event.payload) {
                            Ok(totals) => store.apply_snapshot(totals),
                            Err(e) => warn!("Discarding malformed totals push: {}", e),
                        }
                    }
                    Ok(_) => {}
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        debug!("Totals push stream lagged, skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            if let Some(store) = store.upgrade() {
                store.connected.store(false, Ordering::SeqCst);
            }
        });

        self.connected.store(true, Ordering::SeqCst);
        let mut task = self.push_task.lock().unwrap();
        if let Some(previous) = task.replace(handle) {
            previous.abort();
        }
    }

    /// Registers a listener; returns a capability that removes it.
    /// Listeners run synchronously in registration order on every update.
    pub fn subscribe(
        &self,
        callback: impl Fn(&FinancialTotals) + Send + Sync + 'static,
    ) -> TotalsSubscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        if !self.destroyed.load(Ordering::SeqCst) {
            self.listeners.lock().unwrap().push((id, Arc::new(callback)));
        }
        TotalsSubscription {
            listeners: Arc::downgrade(&self.listeners),
            id,
        }
    }

    /// The last known snapshot, possibly stale if disconnected.
    pub fn get_totals(&self) -> Option<FinancialTotals> {
        self.totals.lock().unwrap().clone()
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    /// Re-pulls the snapshot via the source and notifies listeners. A pull
    /// failure is non-fatal: the last known snapshot stays in place.
    pub async fn refresh(&self) {
        match self.source.fetch_totals(&self.user_id).await {
            Ok(totals) => self.apply_snapshot(totals),
            Err(e) => error!("Failed to refresh totals for user {}: {}", self.user_id, e),
        }
    }

    /// Disconnects the transport and clears all listeners. Idempotent.
    pub fn destroy(&self) {
        if self.destroyed.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(task) = self.push_task.lock().unwrap().take() {
            task.abort();
        }
        self.connected.store(false, Ordering::SeqCst);
        self.listeners.lock().unwrap().clear();
    }

    fn apply_snapshot(&self, totals: FinancialTotals) {
        if self.destroyed.load(Ordering::SeqCst) {
            return;
        }
        *self.totals.lock().unwrap() = Some(totals.clone());

        // Clone the registry out of the lock so listeners may re-enter the
        // store (subscribe, get_totals) without deadlocking.
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            if catch_unwind(AssertUnwindSafe(|| listener(&totals))).is_err() {
                error!("Totals listener panicked; remaining listeners still run");
            }
        }
    }
}

impl Drop for TotalsStore {
    fn drop(&mut self) {
        if let Some(task) = self.push_task.lock().unwrap().take() {
            task.abort();
        }
    }
}

/// Capability returned by [`TotalsStore::subscribe`]; removing the listener
/// more than once is a no-op.
pub struct TotalsSubscription {
    listeners: Weak<Mutex<Vec<(u64, Listener)>>>,
    id: u64,
}

impl TotalsSubscription {
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().unwrap().retain(|(id, _)| *id != self.id);
        }
    }
}
