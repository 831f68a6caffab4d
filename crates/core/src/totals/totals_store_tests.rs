use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::errors::{Result, StoreError};
use crate::events::{totals_topic, EventBus};
use crate::totals::{FinancialTotals, TotalsSource, TotalsStore};

struct MockTotalsSource {
    result: Mutex<Option<FinancialTotals>>,
}

impl MockTotalsSource {
    fn returning(totals: FinancialTotals) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(Some(totals)),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(None),
        })
    }

    fn set(&self, totals: Option<FinancialTotals>) {
        *self.result.lock().unwrap() = totals;
    }
}

#[async_trait]
impl TotalsSource for MockTotalsSource {
    async fn fetch_totals(&self, _user_id: &str) -> Result<FinancialTotals> {
        self.result
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StoreError::Unavailable("offline".to_string()).into())
    }
}

fn sample(balance: Decimal) -> FinancialTotals {
    FinancialTotals {
        total_balance: balance,
        total_savings_goal: dec!(0),
        total_savings_current: dec!(0),
        total_debt_amount: dec!(0),
        total_emi_amount: dec!(0),
        total_emi_monthly_payment: dec!(0),
        total_expenses: dec!(0),
        monthly_income: dec!(0),
        last_calculated: Utc::now(),
    }
}

#[tokio::test]
async fn test_refresh_seeds_snapshot_and_notifies_listeners() {
    let store = TotalsStore::new("u1", MockTotalsSource::returning(sample(dec!(1500))));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = store.subscribe(move |totals| {
        tx.send(totals.total_balance).ok();
    });

    assert!(store.get_totals().is_none());
    store.refresh().await;

    let seen = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert_eq!(seen, Some(dec!(1500)));
    assert_eq!(store.get_totals().unwrap().total_balance, dec!(1500));
}

#[tokio::test]
async fn test_failed_refresh_keeps_last_known_snapshot() {
    let source = MockTotalsSource::returning(sample(dec!(900)));
    let store = TotalsStore::new("u1", source.clone());

    store.refresh().await;
    assert_eq!(store.get_totals().unwrap().total_balance, dec!(900));

    source.set(None);
    store.refresh().await;
    assert_eq!(store.get_totals().unwrap().total_balance, dec!(900));
}

#[tokio::test]
async fn test_push_updates_store_for_bound_user_only() {
    let bus = EventBus::new(8);
    let store = TotalsStore::new("u1", MockTotalsSource::failing());
    store.connect(bus.subscribe());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = store.subscribe(move |totals| {
        tx.send(totals.total_balance).ok();
    });

    // A push for another user's topic must not reach this store.
    bus.publish(
        totals_topic("someone-else"),
        serde_json::to_value(sample(dec!(1))).unwrap(),
    );
    bus.publish(
        totals_topic("u1"),
        serde_json::to_value(sample(dec!(777))).unwrap(),
    );

    let seen = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert_eq!(seen, Some(dec!(777)));
    assert_eq!(store.get_totals().unwrap().total_balance, dec!(777));
}

#[tokio::test]
async fn test_unsubscribed_listener_is_not_invoked() {
    let bus = EventBus::new(8);
    let store = TotalsStore::new("u1", MockTotalsSource::failing());
    store.connect(bus.subscribe());

    let removed_calls = Arc::new(AtomicUsize::new(0));
    let removed_calls_in_listener = removed_calls.clone();
    let removed = store.subscribe(move |_| {
        removed_calls_in_listener.fetch_add(1, Ordering::SeqCst);
    });

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _kept = store.subscribe(move |totals| {
        tx.send(totals.total_balance).ok();
    });

    removed.unsubscribe();
    // A second unsubscribe is a no-op.
    removed.unsubscribe();

    bus.publish(
        totals_topic("u1"),
        serde_json::to_value(sample(dec!(42))).unwrap(),
    );

    // Listeners run in registration order, so once the kept listener has
    // fired, the removed one would already have run if it were still there.
    let seen = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert_eq!(seen, Some(dec!(42)));
    assert_eq!(removed_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_panicking_listener_does_not_stop_remaining_listeners() {
    let store = TotalsStore::new("u1", MockTotalsSource::returning(sample(dec!(5))));

    let _first = store.subscribe(|_| panic!("listener blew up"));
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _second = store.subscribe(move |totals| {
        tx.send(totals.total_balance).ok();
    });

    store.refresh().await;

    let seen = timeout(Duration::from_secs(1), rx.recv()).await.unwrap();
    assert_eq!(seen, Some(dec!(5)));
}

#[tokio::test]
async fn test_destroy_is_idempotent_and_silences_pushes() {
    let bus = EventBus::new(8);
    let store = TotalsStore::new("u1", MockTotalsSource::failing());
    store.connect(bus.subscribe());
    assert!(store.is_connected());

    let (tx, mut rx) = mpsc::unbounded_channel();
    let _subscription = store.subscribe(move |totals| {
        tx.send(totals.total_balance).ok();
    });

    store.destroy();
    store.destroy();
    assert!(!store.is_connected());

    bus.publish(
        totals_topic("u1"),
        serde_json::to_value(sample(dec!(9))).unwrap(),
    );

    // The cleared listener drops its sender, so recv yields None; either way
    // no value may arrive.
    let outcome = timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(
        !matches!(outcome, Ok(Some(_))),
        "destroyed store must not notify listeners"
    );
}
