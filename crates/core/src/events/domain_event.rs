//! Domain event types.

use serde::{Deserialize, Serialize};

/// The four per-user record collections that feed totals aggregation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordCollection {
    Emi,
    Expense,
    Debt,
    Savings,
}

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (totals recomputation,
/// push publication, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// Records in one of the four collections were created, updated, or
    /// soft-deleted.
    RecordsChanged {
        user_id: String,
        collection: RecordCollection,
    },

    /// The user's profile changed (salary, income override, or a direct
    /// financial-field edit).
    ProfileChanged { user_id: String },
}

impl DomainEvent {
    /// Creates a RecordsChanged event.
    pub fn records_changed(user_id: impl Into<String>, collection: RecordCollection) -> Self {
        Self::RecordsChanged {
            user_id: user_id.into(),
            collection,
        }
    }

    /// Creates a ProfileChanged event.
    pub fn profile_changed(user_id: impl Into<String>) -> Self {
        Self::ProfileChanged {
            user_id: user_id.into(),
        }
    }

    /// The user whose totals this event invalidates.
    pub fn user_id(&self) -> &str {
        match self {
            Self::RecordsChanged { user_id, .. } => user_id,
            Self::ProfileChanged { user_id } => user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::records_changed("user-1", RecordCollection::Emi);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("records_changed"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::RecordsChanged {
                user_id,
                collection,
            } => {
                assert_eq!(user_id, "user-1");
                assert_eq!(collection, RecordCollection::Emi);
            }
            _ => panic!("Expected RecordsChanged"),
        }
    }

    #[test]
    fn test_user_id_accessor() {
        assert_eq!(DomainEvent::profile_changed("u9").user_id(), "u9");
        assert_eq!(
            DomainEvent::records_changed("u3", RecordCollection::Savings).user_id(),
            "u3"
        );
    }
}
