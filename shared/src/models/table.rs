//! Table Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Table label: the backend hands out either text ("A1") or plain numbers (12)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableNumber {
    Number(i64),
    Text(String),
}

impl Default for TableNumber {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TableNumber {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for TableNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TableNumber {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Dining table entity (mesa)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub table_number: TableNumber,
    pub capacity: i32,
    /// Empty when the backend does not report one
    #[serde(default)]
    pub location: String,
}

impl Table {
    /// Create an unsaved table
    pub fn new(table_number: impl Into<TableNumber>, capacity: i32) -> Self {
        Self {
            id: None,
            table_number: table_number.into(),
            capacity,
            location: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

/// Read-only table projection embedded in a reservation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSummary {
    pub id: i64,
    pub table_number: TableNumber,
}
