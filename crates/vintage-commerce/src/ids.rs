//! Newtype IDs for catalog and cart records.
//!
//! Records come from the hosted database with string keys; wrapping them
//! keeps a `CollectionId` from being passed where a `ProductId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(ProductId);
define_id!(
    /// Also the cart key: one line per variant.
    VariantId
);
define_id!(CollectionId);
define_id!(CartId);
define_id!(LineItemId);

impl CartId {
    pub fn generate() -> Self {
        Self(generate_id())
    }
}

impl LineItemId {
    pub fn generate() -> Self {
        Self(generate_id())
    }
}

/// Timestamp nanos mixed with a process-wide counter.
///
/// Only cart records are generated locally; catalog IDs always come from
/// the data source.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("{:x}-{:x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let id1 = LineItemId::generate();
        let id2 = LineItemId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CollectionId::new("col-denim");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"col-denim\"");

        let back: CollectionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = VariantId::new("var-789");
        assert_eq!(format!("{}", id), "var-789");
    }
}
