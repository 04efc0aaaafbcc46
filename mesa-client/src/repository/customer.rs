use super::{Repository, Resource};
use crate::ClientResult;
use crate::normalize::{CustomerDto, customer_from_wire, customer_to_wire};
use serde_json::Value;
use shared::models::Customer;

/// `/customers`
#[derive(Debug, Clone, Copy)]
pub struct CustomerResource;

impl Resource for CustomerResource {
    type Entity = Customer;
    type Dto = CustomerDto;

    const NAME: &'static str = "customer";
    const PATH: &'static str = "customers";

    fn from_wire(value: &Value) -> ClientResult<Customer> {
        customer_from_wire(value)
    }

    fn to_wire(entity: &Customer) -> CustomerDto {
        customer_to_wire(entity)
    }
}

pub type CustomerRepository = Repository<CustomerResource>;
