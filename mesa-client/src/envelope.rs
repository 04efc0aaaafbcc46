//! Response envelopes
//!
//! The backend answers either with the payload itself or with
//! `{ "data": payload }`. Both are accepted everywhere.

use serde_json::Value;

/// Outer shape of a response body
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Bare(Value),
    Wrapped { data: Value },
}

impl Envelope {
    /// Classify a parsed body. A `data` field that is `null` does not count
    /// as a wrapper.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.get("data").is_some_and(|d| !d.is_null()) => {
                let data = map.remove("data").unwrap_or(Value::Null);
                Self::Wrapped { data }
            }
            other => Self::Bare(other),
        }
    }

    pub fn into_inner(self) -> Value {
        match self {
            Self::Bare(value) | Self::Wrapped { data: value } => value,
        }
    }
}

/// Unwrap a collection body; anything that is not an array yields no items
pub fn unwrap_collection(body: Value) -> Vec<Value> {
    match Envelope::classify(body).into_inner() {
        Value::Array(items) => items,
        Value::Null => Vec::new(),
        other => {
            tracing::warn!(kind = json_kind(&other), "Collection response is not an array");
            Vec::new()
        }
    }
}

/// Unwrap a single-entity body
pub fn unwrap_entity(body: Value) -> Value {
    Envelope::classify(body).into_inner()
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify() {
        assert_eq!(
            Envelope::classify(json!({ "data": [1] })),
            Envelope::Wrapped { data: json!([1]) }
        );
        assert_eq!(Envelope::classify(json!([1])), Envelope::Bare(json!([1])));
        assert_eq!(
            Envelope::classify(json!({ "data": null, "id": 1 })),
            Envelope::Bare(json!({ "data": null, "id": 1 }))
        );
    }

    #[test]
    fn test_unwrap_collection_shapes() {
        assert!(unwrap_collection(json!([])).is_empty());
        assert!(unwrap_collection(json!({ "data": [] })).is_empty());
        assert_eq!(unwrap_collection(json!([{ "id": 1 }])).len(), 1);
        assert_eq!(unwrap_collection(json!({ "data": [{ "id": 1 }, { "id": 2 }] })).len(), 2);
    }

    #[test]
    fn test_unwrap_collection_without_array_is_empty() {
        assert!(unwrap_collection(Value::Null).is_empty());
        assert!(unwrap_collection(json!({ "message": "ok" })).is_empty());
        assert!(unwrap_collection(json!({ "data": { "id": 1 } })).is_empty());
    }

    #[test]
    fn test_unwrap_entity_shapes() {
        assert_eq!(unwrap_entity(json!({ "id": 3 })), json!({ "id": 3 }));
        assert_eq!(unwrap_entity(json!({ "data": { "id": 3 } })), json!({ "id": 3 }));
    }
}
