use derive_new::new;
use kernel::model::{
    id::{CustomerId, ReservationId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        parse_start_at, NumGuests, Reservation,
    },
};
use serde::{Deserialize, Serialize};
use shared::error::AppError;

// 人数・日時は文字列で受け取り、kernel 側の検証を通して変換する
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationForm {
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub start_at: String,
    pub notes: Option<String>,
}

#[derive(new)]
pub struct CreateReservationFormWithCustomerId(CustomerId, CreateReservationForm);

impl TryFrom<CreateReservationFormWithCustomerId> for CreateReservation {
    type Error = AppError;

    fn try_from(value: CreateReservationFormWithCustomerId) -> Result<Self, Self::Error> {
        let CreateReservationFormWithCustomerId(
            customer_id,
            CreateReservationForm {
                num_guests,
                start_at,
                notes,
            },
        ) = value;
        Ok(CreateReservation::new(
            customer_id,
            NumGuests::parse(&num_guests)?,
            parse_start_at(&start_at)?,
            notes,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationForm {
    pub reservation_id: ReservationId,
    #[serde(default)]
    pub num_guests: String,
    #[serde(default)]
    pub start_at: String,
    pub notes: Option<String>,
}

impl TryFrom<UpdateReservationForm> for UpdateReservation {
    type Error = AppError;

    fn try_from(value: UpdateReservationForm) -> Result<Self, Self::Error> {
        let UpdateReservationForm {
            reservation_id,
            num_guests,
            start_at,
            notes,
        } = value;
        Ok(UpdateReservation::new(
            reservation_id,
            NumGuests::parse(&num_guests)?,
            parse_start_at(&start_at)?,
            notes,
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub num_guests: i32,
    pub formatted_start_at: String,
    // datetime-local 入力欄の初期値
    pub start_at_input: String,
    pub notes: String,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let formatted_start_at = value.formatted_start_at();
        let Reservation {
            id,
            num_guests,
            start_at,
            notes,
            ..
        } = value;
        Self {
            id,
            num_guests: num_guests.get(),
            formatted_start_at,
            start_at_input: start_at.format("%Y-%m-%dT%H:%M").to_string(),
            notes,
        }
    }
}
