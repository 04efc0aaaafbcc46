//! Customer normalization

use super::{FieldRule, ID, WireObject};
use crate::ClientResult;
use serde::Serialize;
use serde_json::Value;
use shared::models::Customer;

pub const NAME: FieldRule = FieldRule::new("name", &["nombre", "name"]);
pub const EMAIL: FieldRule = FieldRule::new("email", &["correo", "email"]);
pub const PHONE: FieldRule = FieldRule::new("phone", &["telefono", "phone"]);
pub const ADDRESS: FieldRule = FieldRule::new("address", &["direccion", "address"]);
pub const CREATED_AT: FieldRule = FieldRule::new("created_at", &["created_at", "createdAt"]);
pub const UPDATED_AT: FieldRule = FieldRule::new("updated_at", &["updated_at", "updatedAt"]);

pub const CUSTOMER_FIELDS: &[FieldRule] =
    &[ID, NAME, EMAIL, PHONE, ADDRESS, CREATED_AT, UPDATED_AT];

/// Customer as the backend expects it on write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub correo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

pub fn customer_from_wire(value: &Value) -> ClientResult<Customer> {
    let obj = WireObject::parse(value, "customer")?;
    Ok(Customer {
        id: obj.int(&ID),
        name: obj.string_or_empty(&NAME),
        email: obj.string_or_empty(&EMAIL),
        phone: obj.string(&PHONE),
        address: obj.string(&ADDRESS),
        created_at: obj.string(&CREATED_AT),
        updated_at: obj.string(&UPDATED_AT),
    })
}

pub fn customer_to_wire(customer: &Customer) -> CustomerDto {
    CustomerDto {
        id: customer.id,
        nombre: customer.name.clone(),
        correo: customer.email.clone(),
        telefono: customer.phone.clone(),
        direccion: customer.address.clone(),
        created_at: customer.created_at.clone(),
        updated_at: customer.updated_at.clone(),
    }
}
