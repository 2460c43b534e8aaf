use super::customer_path;
use crate::{
    model::{
        customer::{
            BestCustomerResponse, CreateCustomerForm, CustomerListItemResponse,
            CustomerListQuery, CustomerResponse, UpdateCustomerForm, UpdateCustomerFormWithId,
        },
        reservation::ReservationResponse,
    },
    view::render,
};
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    Form,
};
use garde::Validate;
use kernel::model::id::CustomerId;
use minijinja::context;
use registry::AppRegistry;
use shared::error::AppResult;

pub const BEST_CUSTOMERS_LIMIT: i64 = 10;

pub async fn show_customer_list(
    Query(query): Query<CustomerListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Html<String>> {
    let customers = match query.search_term() {
        Some(term) => {
            tracing::debug!(term, "searching customers");
            registry.customer_repository().search_by_name(term).await?
        }
        None => registry.customer_repository().find_all().await?,
    };

    // 顧客ごとに直近の予約を取得する
    let reservation_repository = registry.reservation_repository();
    let mut items = Vec::with_capacity(customers.len());
    for customer in customers {
        let most_recent = reservation_repository
            .find_most_recent_by_customer_id(customer.id)
            .await?;
        items.push(CustomerListItemResponse::new(customer, most_recent));
    }

    render(
        "customer_list.html",
        context! { customers => items, search => query.search_term() },
    )
}

pub async fn show_best_customers(State(registry): State<AppRegistry>) -> AppResult<Html<String>> {
    let best_customers: Vec<BestCustomerResponse> = registry
        .customer_repository()
        .find_best(BEST_CUSTOMERS_LIMIT)
        .await?
        .into_iter()
        .map(BestCustomerResponse::from)
        .collect();

    render(
        "customer_best.html",
        context! { bestCustomers => best_customers },
    )
}

pub async fn show_new_customer_form() -> AppResult<Html<String>> {
    render("customer_new_form.html", context! {})
}

pub async fn register_customer(
    State(registry): State<AppRegistry>,
    Form(form): Form<CreateCustomerForm>,
) -> AppResult<Redirect> {
    form.validate(&())?;

    let customer_id = registry.customer_repository().create(form.into()).await?;
    Ok(Redirect::to(&customer_path(customer_id)))
}

pub async fn show_customer(
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
        "customer_detail.html",
        context! {
            customer => CustomerResponse::from(customer),
            reservations => reservations,
        },
    )
}

pub async fn show_edit_customer_form(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Html<String>> {
    let customer = registry.customer_repository().find_by_id(customer_id).await?;

    render(
        "customer_edit_form.html",
        context! { customer => CustomerResponse::from(customer) },
    )
}

pub async fn update_customer(
    Path(customer_id): Path<CustomerId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<UpdateCustomerForm>,
) -> AppResult<Redirect> {
    form.validate(&())?;

    let update_customer = UpdateCustomerFormWithId::new(customer_id, form);
    registry
        .customer_repository()
        .update(update_customer.into())
        .await?;
    Ok(Redirect::to(&customer_path(customer_id)))
}
