use super::NumGuests;
use crate::model::{
    customer::normalize_notes,
    id::{CustomerId, ReservationId},
};
use chrono::{DateTime, Local};

#[derive(Debug)]
pub struct CreateReservation {
    pub customer_id: CustomerId,
    pub num_guests: NumGuests,
    pub start_at: DateTime<Local>,
    pub notes: String,
}

impl CreateReservation {
    pub fn new(
        customer_id: CustomerId,
        num_guests: NumGuests,
        start_at: DateTime<Local>,
        notes: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            num_guests,
            start_at,
            notes: normalize_notes(notes),
        }
    }
}

#[derive(Debug)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub num_guests: NumGuests,
    pub start_at: DateTime<Local>,
    pub notes: String,
}

impl UpdateReservation {
    pub fn new(
        reservation_id: ReservationId,
        num_guests: NumGuests,
        start_at: DateTime<Local>,
        notes: Option<String>,
    ) -> Self {
        Self {
            reservation_id,
            num_guests,
            start_at,
            notes: normalize_notes(notes),
        }
    }
}
