//! Wire <-> domain normalization
//!
//! The backend names fields in Spanish and is not consistent about it: the
//! same field may arrive under an English name, relations may or may not be
//! embedded, and numbers sometimes come as strings. Reads are therefore
//! lenient and table-driven; writes emit exactly the localized names.
//!
//! Every logical field is described by a [`FieldRule`]: an ordered list of
//! candidate wire keys. The first candidate holding a usable value wins;
//! `null` counts as absent.

pub mod customer;
pub mod reservation;
pub mod table;

pub use customer::{CUSTOMER_FIELDS, CustomerDto, customer_from_wire, customer_to_wire};
pub use reservation::{
    CUSTOMER_SUMMARY_FIELDS, RESERVATION_FIELDS, ReservationDto, TABLE_SUMMARY_FIELDS,
    normalize_time, reservation_from_wire, reservation_to_wire,
};
pub use table::{TABLE_FIELDS, TableDto, table_from_wire, table_to_wire};

use crate::envelope::json_kind;
use crate::{ClientError, ClientResult};
use serde_json::{Map, Value};
use shared::models::TableNumber;

/// Candidate wire keys for one domain field, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Domain field name
    pub field: &'static str,
    pub candidates: &'static [&'static str],
}

impl FieldRule {
    pub const fn new(field: &'static str, candidates: &'static [&'static str]) -> Self {
        Self { field, candidates }
    }
}

/// Server-assigned identifier, shared by every resource
pub const ID: FieldRule = FieldRule::new("id", &["id"]);

/// Borrowed view over a wire object with lenient typed accessors
#[derive(Debug, Clone, Copy)]
pub struct WireObject<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> WireObject<'a> {
    /// Fails when the payload is not a JSON object
    pub fn parse(value: &'a Value, resource: &str) -> ClientResult<Self> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(ClientError::InvalidResponse(format!(
                "expected {} object, got {}",
                resource,
                json_kind(other)
            ))),
        }
    }

    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// First non-null value among the candidates
    pub fn lookup(&self, rule: &FieldRule) -> Option<&'a Value> {
        rule.candidates
            .iter()
            .find_map(|key| self.map.get(*key).filter(|v| !v.is_null()))
    }

    fn find<T>(&self, rule: &FieldRule, coerce: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
        rule.candidates
            .iter()
            .filter_map(|key| self.map.get(*key))
            .find_map(coerce)
    }

    pub fn string(&self, rule: &FieldRule) -> Option<String> {
        self.find(rule, coerce_string)
    }

    /// String field defaulting to empty
    pub fn string_or_empty(&self, rule: &FieldRule) -> String {
        self.string(rule).unwrap_or_default()
    }

    pub fn int(&self, rule: &FieldRule) -> Option<i64> {
        self.find(rule, coerce_int)
    }

    /// `i32` field defaulting to zero
    pub fn int32_or_zero(&self, rule: &FieldRule) -> i32 {
        self.find(rule, |v| coerce_int(v).and_then(|n| i32::try_from(n).ok()))
            .unwrap_or_default()
    }

    pub fn table_number(&self, rule: &FieldRule) -> Option<TableNumber> {
        self.find(rule, coerce_table_number)
    }

    /// Nested object (embedded relation)
    pub fn object(&self, rule: &FieldRule) -> Option<WireObject<'a>> {
        self.find(rule, |v| v.as_object().map(WireObject::from_map))
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer value of a JSON number, accepting integral floats like `3.0`
fn integral(n: &serde_json::Number) -> Option<i64> {
    n.as_i64()
        .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => integral(n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_table_number(value: &Value) -> Option<TableNumber> {
    match value {
        Value::Number(n) => integral(n).map(TableNumber::Number),
        Value::String(s) if !s.is_empty() => Some(TableNumber::Text(s.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: FieldRule = FieldRule::new("name", &["nombre", "name"]);
    const COUNT: FieldRule = FieldRule::new("count", &["cantidad", "count"]);

    #[test]
    fn test_first_candidate_wins() {
        let value = json!({ "nombre": "Ana", "name": "Anna" });
        let obj = WireObject::parse(&value, "customer").unwrap();
        assert_eq!(obj.string(&NAME).as_deref(), Some("Ana"));
    }

    #[test]
    fn test_null_falls_through_to_fallback() {
        let value = json!({ "nombre": null, "name": "Anna" });
        let obj = WireObject::parse(&value, "customer").unwrap();
        assert_eq!(obj.string(&NAME).as_deref(), Some("Anna"));
        assert_eq!(obj.lookup(&NAME), Some(&json!("Anna")));
    }

    #[test]
    fn test_defaults_when_absent() {
        let value = json!({});
        let obj = WireObject::parse(&value, "customer").unwrap();
        assert_eq!(obj.string_or_empty(&NAME), "");
        assert_eq!(obj.int32_or_zero(&COUNT), 0);
        assert!(obj.lookup(&NAME).is_none());
    }

    #[test]
    fn test_int_coercion() {
        let value = json!({ "cantidad": "4" });
        let obj = WireObject::parse(&value, "table").unwrap();
        assert_eq!(obj.int(&COUNT), Some(4));

        let value = json!({ "cantidad": 4.0 });
        let obj = WireObject::parse(&value, "table").unwrap();
        assert_eq!(obj.int(&COUNT), Some(4));

        let value = json!({ "cantidad": "many", "count": 2 });
        let obj = WireObject::parse(&value, "table").unwrap();
        assert_eq!(obj.int(&COUNT), Some(2));
    }

    #[test]
    fn test_table_number_accepts_integral_float() {
        const LABEL: FieldRule = FieldRule::new("tableNumber", &["numero_mesa", "table_number"]);

        let value = json!({ "numero_mesa": 3.0 });
        let obj = WireObject::parse(&value, "table").unwrap();
        assert_eq!(obj.table_number(&LABEL), Some(TableNumber::Number(3)));

        let value = json!({ "numero_mesa": 3.5, "table_number": "B2" });
        let obj = WireObject::parse(&value, "table").unwrap();
        assert_eq!(obj.table_number(&LABEL), Some(TableNumber::Text("B2".into())));
    }

    #[test]
    fn test_rule_tables_are_well_formed() {
        for table in [
            CUSTOMER_FIELDS,
            TABLE_FIELDS,
            RESERVATION_FIELDS,
            TABLE_SUMMARY_FIELDS,
            CUSTOMER_SUMMARY_FIELDS,
        ] {
            let mut fields: Vec<_> = table.iter().map(|r| r.field).collect();
            fields.sort_unstable();
            fields.dedup();
            assert_eq!(fields.len(), table.len());
            assert!(table.iter().all(|r| !r.candidates.is_empty()));
        }
    }

    #[test]
    fn test_localized_name_is_tried_first() {
        let first = |field: &str| {
            RESERVATION_FIELDS
                .iter()
                .find(|r| r.field == field)
                .map(|r| r.candidates[0])
        };
        assert_eq!(first("tableId"), Some("mesa_id"));
        assert_eq!(first("customerId"), Some("comensal_id"));
        assert_eq!(first("table"), Some("mesa"));
    }

    #[test]
    fn test_non_object_rejected() {
        let value = json!([1, 2]);
        let err = WireObject::parse(&value, "table").unwrap_err();
        assert_eq!(err.to_string(), "Invalid response: expected table object, got array");
    }
}
