//! Frontend Models
//!
//! Data structures for the to-buy list.

use serde::{Deserialize, Serialize};

/// A single entry on the list
///
/// `acquired` is serialized as `bought`, the field name existing storage
/// slots already use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(rename = "bought")]
    pub acquired: bool,
}

impl Item {
    /// Create a new, not-yet-acquired item
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            acquired: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new("Milk");
        assert_eq!(item.name, "Milk");
        assert!(!item.acquired);
    }

    #[test]
    fn test_wire_format_uses_bought_field() {
        let json = serde_json::to_string(&Item::new("Milk")).unwrap();
        assert_eq!(json, r#"{"name":"Milk","bought":false}"#);

        let parsed: Item = serde_json::from_str(r#"{"name":"Bread","bought":true}"#).unwrap();
        assert_eq!(
            parsed,
            Item {
                name: "Bread".to_string(),
                acquired: true,
            }
        );
    }
}
