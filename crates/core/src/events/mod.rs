//! Events module - domain events, sinks, and the push bus.

mod bus;
mod domain_event;
mod sink;
mod topics;

pub use bus::{EventBus, PushEvent};
pub use domain_event::{DomainEvent, RecordCollection};
pub use sink::{DomainEventSink, MockDomainEventSink, NoOpDomainEventSink};
pub use topics::{totals_topic, TOTALS_TOPIC_PREFIX};
