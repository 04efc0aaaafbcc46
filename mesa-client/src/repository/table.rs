use super::{Repository, Resource};
use crate::ClientResult;
use crate::normalize::{TableDto, table_from_wire, table_to_wire};
use serde_json::Value;
use shared::models::Table;

/// `/tables`
#[derive(Debug, Clone, Copy)]
pub struct TableResource;

impl Resource for TableResource {
    type Entity = Table;
    type Dto = TableDto;

    const NAME: &'static str = "table";
    const PATH: &'static str = "tables";

    fn from_wire(value: &Value) -> ClientResult<Table> {
        table_from_wire(value)
    }

    fn to_wire(entity: &Table) -> TableDto {
        table_to_wire(entity)
    }
}

pub type TableRepository = Repository<TableResource>;
