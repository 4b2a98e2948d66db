use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// The kind of difference reported for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Modify,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Add => write!(f, "ADD"),
            Action::Remove => write!(f, "REMOVE"),
            Action::Modify => write!(f, "MODIFY"),
        }
    }
}

/// Old and new value of one modified column, both in default string form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    pub old: String,
    pub new: String,
}

/// One reported difference, keyed by the record's composite primary key
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeEntry {
    Added {
        key: String,
        /// Every non-ignored column with its display-formatted value
        fields: IndexMap<String, String>,
    },
    Removed {
        key: String,
    },
    Modified {
        key: String,
        /// Only the columns that differ, old value and new value each
        fields: IndexMap<String, FieldChange>,
    },
}

impl ChangeEntry {
    pub fn action(&self) -> Action {
        match self {
            ChangeEntry::Added { .. } => Action::Add,
            ChangeEntry::Removed { .. } => Action::Remove,
            ChangeEntry::Modified { .. } => Action::Modify,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ChangeEntry::Added { key, .. } => key,
            ChangeEntry::Removed { key } => key,
            ChangeEntry::Modified { key, .. } => key,
        }
    }
}

/// Custom serialization for ChangeEntry that flattens the variant into an
/// "action" discriminator for JSON output
impl Serialize for ChangeEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            ChangeEntry::Added { key, fields } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("action", "ADD")?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            ChangeEntry::Removed { key } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("action", "REMOVE")?;
                map.serialize_entry("key", key)?;
                map.end()
            }
            ChangeEntry::Modified { key, fields } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("action", "MODIFY")?;
                map.serialize_entry("key", key)?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Add.to_string(), "ADD");
        assert_eq!(Action::Remove.to_string(), "REMOVE");
        assert_eq!(Action::Modify.to_string(), "MODIFY");
    }

    #[test]
    fn test_serialize_added() {
        let mut fields = IndexMap::new();
        fields.insert("id".to_string(), "1".to_string());
        fields.insert("name".to_string(), "A".to_string());
        let entry = ChangeEntry::Added {
            key: "1".to_string(),
            fields,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "ADD");
        assert_eq!(value["key"], "1");
        assert_eq!(value["fields"]["name"], "A");
    }

    #[test]
    fn test_serialize_removed_has_no_fields() {
        let entry = ChangeEntry::Removed {
            key: "2".to_string(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "REMOVE");
        assert_eq!(value["key"], "2");
        assert_eq!(value.get("fields"), None);
    }

    #[test]
    fn test_serialize_modified() {
        let mut fields = IndexMap::new();
        fields.insert(
            "name".to_string(),
            FieldChange {
                old: "B".to_string(),
                new: "A".to_string(),
            },
        );
        let entry = ChangeEntry::Modified {
            key: "1".to_string(),
            fields,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["action"], "MODIFY");
        assert_eq!(value["fields"]["name"]["old"], "B");
        assert_eq!(value["fields"]["name"]["new"], "A");
    }

    #[test]
    fn test_entry_accessors() {
        let entry = ChangeEntry::Removed {
            key: "3|x".to_string(),
        };
        assert_eq!(entry.action(), Action::Remove);
        assert_eq!(entry.key(), "3|x");

        let entry = ChangeEntry::Added {
            key: "1".to_string(),
            fields: IndexMap::new(),
        };
        assert_eq!(entry.action(), Action::Add);
    }

    #[test]
    fn test_serialized_field_order_preserved() {
        let mut fields = IndexMap::new();
        fields.insert("z".to_string(), "1".to_string());
        fields.insert("a".to_string(), "2".to_string());
        let entry = ChangeEntry::Added {
            key: "k".to_string(),
            fields,
        };

        let text = serde_json::to_string(&entry).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        let keys: Vec<&String> = value["fields"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a"]);
    }
}
