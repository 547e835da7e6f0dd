//! Data models for the VoiceIt site content.
//!
//! Field names match the website's TypeScript interfaces so documents stay
//! interchangeable with the frontend.

mod content;
pub mod defaults;
mod lenient;
mod roster;
mod showcase;
mod slots;

pub use content::*;
pub use roster::*;
pub use showcase::*;
pub use slots::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

/// A value that round-trips through the document store.
///
/// Serialization only ever emits the declared fields, which is what keeps
/// client-supplied extras out of storage. Decoding is tolerant: a malformed
/// document becomes the type's default rather than an error.
pub trait Document:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + Send + Sync + 'static
{
    fn from_document(value: Value) -> Self {
        match serde_json::from_value(value) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Malformed document replaced by defaults: {}", e);
                Self::default()
            }
        }
    }

    fn to_document(&self) -> Result<Value, AppError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A singleton content document such as the hero text.
pub trait Slot: Document {
    /// Document id inside [`SLOTS_COLLECTION`].
    const KEY: &'static str;

    type Patch: DeserializeOwned + Send + 'static;

    fn apply(&mut self, patch: Self::Patch);

    fn get(content: &SiteContent) -> &Self;
    fn get_mut(content: &mut SiteContent) -> &mut Self;

    /// Compiled-in value used to seed an empty store.
    fn seed() -> Self;
}

/// Storage collection holding every slot document.
pub const SLOTS_COLLECTION: &str = "content";

/// An item of a named collection, keyed by id.
pub trait Record: Document {
    const COLLECTION: &'static str;
    /// Human readable name used in error messages.
    const LABEL: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn items(content: &SiteContent) -> &Vec<Self>;
    fn items_mut(content: &mut SiteContent) -> &mut Vec<Self>;

    /// Compiled-in items used to seed an empty collection.
    fn seed() -> Vec<Self>;

    /// Rebuild a record from its storage key and body; the key wins over any stored id.
    fn from_stored(id: String, body: Value) -> Self {
        let mut record = Self::from_document(body);
        record.set_id(id);
        record
    }

    /// Storage body: the declared fields minus the id, which lives in the key.
    fn to_body(&self) -> Result<Value, AppError> {
        let mut body = self.to_document()?;
        if let Value::Object(fields) = &mut body {
            fields.remove("id");
        }
        Ok(body)
    }
}

/// A record the admin may edit field by field.
pub trait Editable: Record {
    type Patch: DeserializeOwned + Send + 'static;

    fn apply(&mut self, patch: Self::Patch);
}

/// An immutable archived copy of a live roster.
pub trait Tenure: Record {
    type Member: Record;

    fn capture(year: String, members: Vec<Self::Member>) -> Self;
    fn year(&self) -> &str;
    fn members(&self) -> &[Self::Member];
}

/// Overwrite a field when the patch names it.
fn patch_field(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Optional fields: an empty string clears the value.
fn patch_optional(field: &mut Option<String>, value: Option<String>) {
    if let Some(value) = value {
        *field = if value.is_empty() { None } else { Some(value) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_body_drops_id_and_extras() {
        let podcast: Podcast = serde_json::from_value(json!({
            "id": "client-id",
            "title": "Ep1",
            "host": "X",
            "duration": "10m",
            "image": "u",
            "onClick": "function () {}",
            "nested": {"ui": true}
        }))
        .unwrap();

        let body = podcast.to_body().unwrap();
        assert_eq!(
            body,
            json!({"title": "Ep1", "host": "X", "duration": "10m", "image": "u"})
        );
    }

    #[test]
    fn test_from_stored_prefers_key() {
        let dept = Department::from_stored(
            "rj-eng".to_string(),
            json!({"id": "stale", "name": "RJ English"}),
        );
        assert_eq!(dept.id, "rj-eng");
        assert_eq!(dept.name, "RJ English");
        assert_eq!(dept.description, "");
    }

    #[test]
    fn test_malformed_document_defaults() {
        let hero = HeroData::from_document(json!("not an object"));
        assert_eq!(hero, HeroData::default());
    }
}
