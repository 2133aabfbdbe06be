//! Form encoding for API request bodies.
//!
//! Request parameters are first described as a tree of [`FormValue`]s, then
//! flattened into bracketed field names (`owner[address][city]`) and finally
//! percent-encoded by `serde_urlencoded`.

use indexmap::IndexMap;
#[cfg(feature = "schemars")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FormEncodeError;

/// Nested form fields, keyed by field name in insertion order
pub type FormFields = IndexMap<String, FormValue>;

/// A single form value: a scalar or a nested group of fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(JsonSchema))]
#[serde(untagged)]
pub enum FormValue {
    Integer(u64),
    String(String),
    Map(FormFields),
}

impl FormValue {
    /// Returns the nested group, if this value is one
    pub fn as_map(&self) -> Option<&FormFields> {
        match self {
            FormValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the scalar rendering of this value (base-10 for integers)
    pub fn as_scalar(&self) -> Option<String> {
        match self {
            FormValue::Integer(value) => Some(value.to_string()),
            FormValue::String(value) => Some(value.clone()),
            FormValue::Map(_) => None,
        }
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::String(value)
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::String(value.to_string())
    }
}

impl From<u64> for FormValue {
    fn from(value: u64) -> Self {
        FormValue::Integer(value)
    }
}

impl From<FormFields> for FormValue {
    fn from(value: FormFields) -> Self {
        FormValue::Map(value)
    }
}

/// Types that can be sent as a form-encoded API request
pub trait FormEncodable {
    /// Name every field is nested under, e.g. `card` for `card[number]`.
    /// `None` sends the fields at the top level.
    fn root_object_name(&self) -> Option<&str> {
        None
    }

    /// The nested fields to send. Unset values must be absent, never empty.
    fn form_fields(&self) -> FormFields;
}

/// Small helper used by encoders to build a group while skipping unset values
#[derive(Debug, Default)]
pub(crate) struct FieldsBuilder {
    fields: FormFields,
}

impl FieldsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn some_string(mut self, key: &str, value: Option<&String>) -> Self {
        if let Some(value) = value {
            self.fields
                .insert(key.to_string(), FormValue::String(value.clone()));
        }
        self
    }

    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), FormValue::String(value.to_string()));
        self
    }

    pub fn some_integer(mut self, key: &str, value: Option<u64>) -> Self {
        if let Some(value) = value {
            self.fields.insert(key.to_string(), FormValue::Integer(value));
        }
        self
    }

    /// Insert a nested group, dropping it when it has no entries
    pub fn group(mut self, key: &str, group: FormFields) -> Self {
        if !group.is_empty() {
            self.fields.insert(key.to_string(), FormValue::Map(group));
        }
        self
    }

    pub fn build(self) -> FormFields {
        self.fields
    }
}

/// Merge `extra` into `fields`. Groups present on both sides are merged key
/// by key; otherwise the value from `extra` wins.
pub fn merge_fields(fields: &mut FormFields, extra: &FormFields) {
    for (key, value) in extra {
        match (fields.get_mut(key), value) {
            (Some(FormValue::Map(existing)), FormValue::Map(incoming)) => {
                merge_fields(existing, incoming);
            }
            _ => {
                fields.insert(key.clone(), value.clone());
            }
        }
    }
    fields.retain(|_, value| !matches!(value, FormValue::Map(map) if map.is_empty()));
}

/// Flatten nested fields into `(name, value)` pairs using bracket syntax.
///
/// `{"owner": {"address": {"city": "Berlin"}}}` becomes
/// `[("owner[address][city]", "Berlin")]`. Empty groups produce no pairs.
pub fn flatten(fields: &FormFields) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in fields {
        flatten_into(key.clone(), value, &mut pairs);
    }
    pairs
}

fn flatten_into(prefix: String, value: &FormValue, pairs: &mut Vec<(String, String)>) {
    match value {
        FormValue::Map(map) => {
            for (key, nested) in map {
                flatten_into(format!("{}[{}]", prefix, key), nested, pairs);
            }
        }
        scalar => {
            if let Some(rendered) = scalar.as_scalar() {
                pairs.push((prefix, rendered));
            }
        }
    }
}

/// Flatten an encodable value, applying its root object name if it has one
pub fn flatten_encodable<T: FormEncodable + ?Sized>(value: &T) -> Vec<(String, String)> {
    let fields = value.form_fields();
    match value.root_object_name() {
        Some(root) => {
            let mut rooted = FormFields::new();
            rooted.insert(root.to_string(), FormValue::Map(fields));
            flatten(&rooted)
        }
        None => flatten(&fields),
    }
}

/// Encode a value as an `application/x-www-form-urlencoded` request body
pub fn encode_body<T: FormEncodable + ?Sized>(value: &T) -> Result<String, FormEncodeError> {
    let pairs = flatten_encodable(value);
    tracing::debug!(fields = pairs.len(), "Encoding form body");
    let body = serde_urlencoded::to_string(&pairs)?;
    Ok(body)
}
