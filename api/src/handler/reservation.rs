use super::customer_path;
use crate::{
    model::{
        customer::CustomerResponse,
        reservation::{
            CreateReservationForm, CreateReservationFormWithCustomerId, ReservationResponse,
            UpdateReservationForm,
        },
    },
    view::render,
};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use kernel::model::{
    id::CustomerId,
    reservation::event::{CreateReservation, UpdateReservation},
};
use minijinja::context;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<CreateReservationForm>,
) -> AppResult<Redirect> {
    // 存在しない顧客への予約は 404 とする
    let customer = registry.customer_repository().find_by_id(customer_id).await?;

    let event =
        CreateReservation::try_from(CreateReservationFormWithCustomerId::new(customer.id, form))?;
    registry.reservation_repository().create(event).await?;

    Ok(Redirect::to(&customer_path(customer.id)))
}

pub async fn show_edit_reservation_form(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Html<String>> {
    let customer = registry.customer_repository().find_by_id(customer_id).await?;
    let reservations: Vec<ReservationResponse> = registry
        .reservation_repository()
        .find_by_customer_id(customer.id)
        .await?
        .into_iter()
        .map(ReservationResponse::from)
        .collect();

    render(
        "reservation_edit_form.html",
        context! {
            customer => CustomerResponse::from(customer),
            reservations => reservations,
        },
    )
}

pub async fn update_reservation(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<UpdateReservationForm>,
) -> AppResult<Redirect> {
    let reservation_repository = registry.reservation_repository();

    // 他の顧客の予約は存在しないものとして扱う
    let reservation = reservation_repository.find_by_id(form.reservation_id).await?;
    if reservation.customer_id != customer_id {
        tracing::warn!(
            reservation_id = %reservation.id,
            owner = %reservation.customer_id,
            requested_by = %customer_id,
            "reservation belongs to another customer"
        );
        return Err(AppError::EntityNotFound(format!(
            "No such reservation for customer {customer_id}: {}",
            reservation.id
        )));
    }

    reservation_repository
        .update(UpdateReservation::try_from(form)?)
        .await?;
    Ok(Redirect::to(&customer_path(customer_id)))
}
