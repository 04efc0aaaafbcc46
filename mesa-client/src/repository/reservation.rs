use super::{Repository, Resource};
use crate::ClientResult;
use crate::normalize::{ReservationDto, reservation_from_wire, reservation_to_wire};
use serde_json::Value;
use shared::models::Reservation;

/// `/reservations`
///
/// Writes send `Accept: application/json`; failed writes carry the
/// endpoint and the response body.
#[derive(Debug, Clone, Copy)]
pub struct ReservationResource;

impl Resource for ReservationResource {
    type Entity = Reservation;
    type Dto = ReservationDto;

    const NAME: &'static str = "reservation";
    const PATH: &'static str = "reservations";
    const ACCEPT_JSON: bool = true;
    const VERBOSE_ERRORS: bool = true;

    fn from_wire(value: &Value) -> ClientResult<Reservation> {
        reservation_from_wire(value)
    }

    fn to_wire(entity: &Reservation) -> ReservationDto {
        reservation_to_wire(entity)
    }
}

pub type ReservationRepository = Repository<ReservationResource>;
