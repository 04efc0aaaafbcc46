//! Reservation Model

use super::{CustomerSummary, TableSummary};
use serde::{Deserialize, Serialize};

/// Reservation entity (reserva)
///
/// `customer_id` / `table_id` are the authoritative references. The embedded
/// `customer` / `table` summaries are read-side projections and are never
/// written back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ISO-8601 date, e.g. `2024-05-01`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    pub number_of_people: i32,
    pub customer_id: i64,
    pub table_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableSummary>,
}

impl Reservation {
    /// Create an unsaved reservation
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        number_of_people: i32,
        customer_id: i64,
        table_id: i64,
    ) -> Self {
        Self {
            id: None,
            date: date.into(),
            time: time.into(),
            number_of_people,
            customer_id,
            table_id,
            customer: None,
            table: None,
        }
    }

    /// Label to show for the reserved table
    pub fn table_label(&self) -> String {
        match &self.table {
            Some(t) => t.table_number.to_string(),
            None => self.table_id.to_string(),
        }
    }
}
