//! Reservation normalization
//!
//! Foreign keys are authoritative. Embedded relations are best-effort:
//! a nested table object wins, otherwise a summary is synthesized from
//! `mesa_id` alone; the customer summary is only ever taken from a nested
//! object.

use super::{FieldRule, ID, WireObject};
use crate::ClientResult;
use serde::Serialize;
use serde_json::Value;
use shared::models::{CustomerSummary, Reservation, TableNumber, TableSummary};

pub const DATE: FieldRule = FieldRule::new("date", &["fecha", "date"]);
pub const TIME: FieldRule = FieldRule::new("time", &["hora", "time"]);
pub const NUMBER_OF_PEOPLE: FieldRule = FieldRule::new(
    "numberOfPeople",
    &["numero_de_personas", "number_of_people", "numberOfPeople"],
);
pub const CUSTOMER_ID: FieldRule =
    FieldRule::new("customerId", &["comensal_id", "customer_id", "customerId"]);
pub const TABLE_ID: FieldRule = FieldRule::new("tableId", &["mesa_id", "table_id", "tableId"]);
pub const TABLE: FieldRule = FieldRule::new("table", &["mesa", "table"]);
pub const CUSTOMER: FieldRule = FieldRule::new("customer", &["comensal", "customer"]);

pub const RESERVATION_FIELDS: &[FieldRule] = &[
    ID,
    DATE,
    TIME,
    NUMBER_OF_PEOPLE,
    CUSTOMER_ID,
    TABLE_ID,
    TABLE,
    CUSTOMER,
];

/// Fields read from an embedded `mesa` object
pub const TABLE_SUMMARY_FIELDS: &[FieldRule] = &[ID, super::table::TABLE_NUMBER];

pub const CUSTOMER_NAME: FieldRule = FieldRule::new("name", &["nombre", "name"]);

/// Fields read from an embedded `comensal` object
pub const CUSTOMER_SUMMARY_FIELDS: &[FieldRule] = &[ID, CUSTOMER_NAME];

/// Label used when the nested table carries no readable number
const UNKNOWN_TABLE_LABEL: &str = "-";

/// Reservation as the backend expects it on write; embedded summaries are
/// never sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub fecha: String,
    pub hora: String,
    pub numero_de_personas: i32,
    pub comensal_id: i64,
    pub mesa_id: i64,
}

/// Label for a table known only by id
pub fn synthesized_table_label(table_id: i64) -> String {
    format!("Mesa #{}", table_id)
}

/// Canonicalize a reservation time to `HH:MM:SS`
///
/// `"18"` -> `"18:00:00"`, `"18:30"` -> `"18:30:00"`, `"18:30:45"` unchanged.
/// Empty input stays empty.
pub fn normalize_time(time: &str) -> String {
    let time = time.trim();
    match time.matches(':').count() {
        _ if time.is_empty() => String::new(),
        0 => format!("{:0>2}:00:00", time),
        1 => format!("{}:00", time),
        _ => time.to_string(),
    }
}

pub fn reservation_from_wire(value: &Value) -> ClientResult<Reservation> {
    let obj = WireObject::parse(value, "reservation")?;

    let nested_table = obj.object(&TABLE);
    let nested_customer = obj.object(&CUSTOMER);

    let table_id = obj
        .int(&TABLE_ID)
        .or_else(|| nested_table.and_then(|t| t.int(&ID)));
    let customer_id = obj
        .int(&CUSTOMER_ID)
        .or_else(|| nested_customer.and_then(|c| c.int(&ID)));

    let table = match nested_table {
        Some(nested) => Some(TableSummary {
            id: nested.int(&ID).or(table_id).unwrap_or_default(),
            table_number: nested
                .table_number(&super::table::TABLE_NUMBER)
                .unwrap_or_else(|| TableNumber::from(UNKNOWN_TABLE_LABEL)),
        }),
        None => table_id.map(|id| TableSummary {
            id,
            table_number: TableNumber::Text(synthesized_table_label(id)),
        }),
    };

    let customer = nested_customer.map(|nested| CustomerSummary {
        id: nested.int(&ID).or(customer_id).unwrap_or_default(),
        name: nested.string_or_empty(&CUSTOMER_NAME),
    });

    let id = obj.int(&ID);
    if table_id.is_none() || customer_id.is_none() {
        tracing::warn!(
            reservation_id = ?id,
            has_table = table_id.is_some(),
            has_customer = customer_id.is_some(),
            "Reservation payload is missing a foreign key"
        );
    }

    Ok(Reservation {
        id,
        date: obj.string_or_empty(&DATE),
        time: obj.string_or_empty(&TIME),
        number_of_people: obj.int32_or_zero(&NUMBER_OF_PEOPLE),
        customer_id: customer_id.unwrap_or_default(),
        table_id: table_id.unwrap_or_default(),
        customer,
        table,
    })
}

pub fn reservation_to_wire(reservation: &Reservation) -> ReservationDto {
    ReservationDto {
        id: reservation.id,
        fecha: reservation.date.clone(),
        hora: normalize_time(&reservation.time),
        numero_de_personas: reservation.number_of_people,
        comensal_id: reservation.customer_id,
        mesa_id: reservation.table_id,
    }
}
