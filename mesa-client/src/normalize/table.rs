//! Table normalization

use super::{FieldRule, ID, WireObject};
use crate::ClientResult;
use serde::Serialize;
use serde_json::Value;
use shared::models::{Table, TableNumber};

pub const TABLE_NUMBER: FieldRule =
    FieldRule::new("tableNumber", &["numero_mesa", "table_number", "tableNumber"]);
pub const CAPACITY: FieldRule = FieldRule::new("capacity", &["capacidad", "capacity"]);
pub const LOCATION: FieldRule = FieldRule::new("location", &["ubicacion", "location"]);

pub const TABLE_FIELDS: &[FieldRule] = &[ID, TABLE_NUMBER, CAPACITY, LOCATION];

/// Table as the backend expects it on write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub numero_mesa: TableNumber,
    pub capacidad: i32,
    pub ubicacion: String,
}

pub fn table_from_wire(value: &Value) -> ClientResult<Table> {
    let obj = WireObject::parse(value, "table")?;
    Ok(Table {
        id: obj.int(&ID),
        table_number: obj.table_number(&TABLE_NUMBER).unwrap_or_default(),
        capacity: obj.int32_or_zero(&CAPACITY),
        location: obj.string_or_empty(&LOCATION),
    })
}

pub fn table_to_wire(table: &Table) -> TableDto {
    TableDto {
        id: table.id,
        numero_mesa: table.table_number.clone(),
        capacidad: table.capacity,
        ubicacion: table.location.clone(),
    }
}
