//! Selectable item model and extraction from raw records.
//!
//! An [`Item`] is the unit the selector works with: a key, a human-readable
//! display value and a disabled flag. Hosts with typed data build items directly
//! with [`Item::new`]; hosts holding loosely-typed JSON records extract them with
//! [`Item::from_record`] using configurable [`FieldNames`].
//!
//! Both the key and the display value are optional. A record whose key field is
//! missing (usually a misconfigured `unique_key`) still yields an item, but that
//! item can never be selected. A missing display value matches no search term.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Default field holding an item's unique key.
pub const DEFAULT_UNIQUE_KEY: &str = "_id";

/// Default field holding an item's display value.
pub const DEFAULT_DISPLAY_KEY: &str = "name";

/// A selectable record with a unique key and a display value.
///
/// The key type `K` is chosen by the host. `key` and `display_value` are
/// `None` when the record did not provide them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<K> {
    pub key: Option<K>,
    pub display_value: Option<String>,
    pub disabled: bool,
}

impl<K> Item<K> {
    /// Creates an enabled item with the given key and display value.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiselect::domain::Item;
    ///
    /// let item = Item::new("a1", "Apple");
    /// assert_eq!(item.key, Some("a1"));
    /// assert_eq!(item.label(), "Apple");
    /// ```
    #[must_use]
    pub fn new(key: K, display_value: impl Into<String>) -> Self {
        Self {
            key: Some(key),
            display_value: Some(display_value.into()),
            disabled: false,
        }
    }

    /// Marks the item as disabled. Disabled items ignore taps.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns the display value, or an empty string when absent.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_value.as_deref().unwrap_or_default()
    }

    /// Returns `true` if this item carries `key`.
    ///
    /// An item without a key matches nothing.
    pub fn has_key(&self, key: &K) -> bool
    where
        K: PartialEq,
    {
        self.key.as_ref() == Some(key)
    }
}

/// Key extracted from a JSON record.
///
/// Keys compare by JSON type and value, so `1` and `"1"` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl ItemKey {
    /// Converts a JSON value into a key.
    ///
    /// Strings, numbers and booleans are keys; `null`, arrays and objects are not.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(*b)),
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for ItemKey {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// Field names used to pull keys and display values out of raw records.
///
/// `display_key` may be a dotted path into nested objects (`"meta.title"`);
/// `unique_key` is always a direct field of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub unique_key: String,
    pub display_key: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            unique_key: DEFAULT_UNIQUE_KEY.to_string(),
            display_key: DEFAULT_DISPLAY_KEY.to_string(),
        }
    }
}

impl FieldNames {
    #[must_use]
    pub fn new(unique_key: impl Into<String>, display_key: impl Into<String>) -> Self {
        Self {
            unique_key: unique_key.into(),
            display_key: display_key.into(),
        }
    }
}

impl Item<ItemKey> {
    /// Extracts an item from a JSON record.
    ///
    /// Missing or unusable fields become `None` rather than errors; a record
    /// that yields no key is logged since it points at a misconfigured
    /// `unique_key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiselect::domain::{FieldNames, Item, ItemKey};
    /// use serde_json::json;
    ///
    /// let record = json!({ "id": 7, "meta": { "title": "Banana" }, "disabled": true });
    /// let item = Item::from_record(&record, &FieldNames::new("id", "meta.title"));
    ///
    /// assert_eq!(item.key, Some(ItemKey::from(7_i64)));
    /// assert_eq!(item.label(), "Banana");
    /// assert!(item.disabled);
    /// ```
    #[must_use]
    pub fn from_record(record: &Value, fields: &FieldNames) -> Self {
        let key = record.get(&fields.unique_key).and_then(ItemKey::from_value);
        if key.is_none() {
            tracing::warn!(
                unique_key = %fields.unique_key,
                "item record has no usable key, it cannot be selected"
            );
        }

        let display_value = lookup_path(record, &fields.display_key).and_then(display_text);
        let disabled = record
            .get("disabled")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Self {
            key,
            display_value,
            disabled,
        }
    }
}

fn lookup_path<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(record, |value, segment| match value {
            Value::Object(map) => map.get(segment),
            Value::Array(list) => segment.parse::<usize>().ok().and_then(|i| list.get(i)),
            _ => None,
        })
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_with_default_field_names() {
        let record = json!({ "_id": "x1", "name": "Apple" });
        let item = Item::from_record(&record, &FieldNames::default());

        assert_eq!(item.key, Some(ItemKey::from("x1")));
        assert_eq!(item.display_value.as_deref(), Some("Apple"));
        assert!(!item.disabled);
    }

    #[test]
    fn missing_fields_become_absent() {
        let record = json!({ "id": 1, "title": "Apple" });
        let item = Item::from_record(&record, &FieldNames::default());

        assert!(item.key.is_none());
        assert!(item.display_value.is_none());
        assert_eq!(item.label(), "");
    }

    #[test]
    fn structured_key_values_are_not_keys() {
        for value in [json!(null), json!([1]), json!({ "a": 1 })] {
            assert!(ItemKey::from_value(&value).is_none());
        }
    }

    #[test]
    fn numeric_display_values_use_json_text() {
        let record = json!({ "_id": 1, "name": 42 });
        let item = Item::from_record(&record, &FieldNames::default());
        assert_eq!(item.label(), "42");
    }

    #[test]
    fn display_path_walks_arrays() {
        let record = json!({ "_id": 1, "names": ["first", "second"] });
        let item = Item::from_record(&record, &FieldNames::new("_id", "names.1"));
        assert_eq!(item.label(), "second");
    }

    #[test]
    fn non_boolean_disabled_means_enabled() {
        let record = json!({ "_id": 1, "name": "a", "disabled": "yes" });
        assert!(!Item::from_record(&record, &FieldNames::default()).disabled);
    }

    #[test]
    fn keys_distinguish_json_types() {
        assert_ne!(ItemKey::from(1_i64), ItemKey::from("1"));
        assert_eq!(ItemKey::from(1_i64).to_string(), "1");
        assert_eq!(ItemKey::from("1").to_string(), "1");
    }

    #[test]
    fn keyless_item_matches_no_key() {
        let item: Item<i32> = Item {
            key: None,
            display_value: Some("ghost".into()),
            disabled: false,
        };
        assert!(!item.has_key(&0));
    }
}
