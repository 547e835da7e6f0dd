//! Tolerant field decoders for documents read back from storage.
//!
//! Stored documents may be partial or carry values of the wrong type. Each decoder
//! falls back to the field's empty value instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn coerce_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Strings; anything else becomes `""`.
pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(coerce_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional strings; null and non-string values become `None`.
pub fn opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(coerce_string(Value::deserialize(deserializer)?))
}

/// Booleans; anything else becomes `false`.
pub fn boolean<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

/// String arrays; non-string entries are skipped.
pub fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items.into_iter().filter_map(coerce_string).collect()),
        _ => Ok(Vec::new()),
    }
}

/// Arrays of records; malformed entries decode to the record default.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect()),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "super::string")]
        name: String,
        #[serde(default, deserialize_with = "super::opt_string")]
        link: Option<String>,
        #[serde(default, deserialize_with = "super::boolean")]
        open: bool,
        #[serde(default, deserialize_with = "super::strings")]
        images: Vec<String>,
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let sample: Sample = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sample.name, "");
        assert_eq!(sample.link, None);
        assert!(!sample.open);
        assert!(sample.images.is_empty());
    }

    #[test]
    fn test_mistyped_fields_fall_back() {
        let sample: Sample = serde_json::from_value(json!({
            "name": 2024,
            "link": {"href": "x"},
            "open": "yes",
            "images": ["a", 1, null, "b"]
        }))
        .unwrap();
        assert_eq!(sample.name, "2024");
        assert_eq!(sample.link, None);
        assert!(!sample.open);
        assert_eq!(sample.images, vec!["a", "1", "b"]);
    }

    #[test]
    fn test_null_fields_fall_back() {
        let sample: Sample = serde_json::from_value(json!({
            "name": null,
            "link": null,
            "open": null,
            "images": null
        }))
        .unwrap();
        assert_eq!(sample.name, "");
        assert_eq!(sample.link, None);
        assert!(!sample.open);
        assert!(sample.images.is_empty());
    }
}
