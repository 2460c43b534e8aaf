use kernel::model::{
    customer::normalize_notes,
    id::{CustomerId, ReservationId},
    reservation::{NumGuests, Reservation},
};
use shared::error::AppError;
use sqlx::{
    types::chrono::{DateTime, Local},
    FromRow,
};

#[derive(FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub customer_id: CustomerId,
    pub num_guests: i32,
    pub start_at: DateTime<Local>,
    pub notes: Option<String>,
}

// 人数の検証を通すため From ではなく TryFrom で変換する
impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            id,
            customer_id,
            num_guests,
            start_at,
            notes,
        } = value;
        Ok(Reservation {
            id,
            customer_id,
            num_guests: NumGuests::new(num_guests)?,
            start_at,
            notes: normalize_notes(notes),
        })
    }
}
