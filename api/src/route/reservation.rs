use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    register_reservation, show_edit_reservation_form, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/:customer_id/add-reservation/", post(register_reservation))
        .route(
            "/:customer_id/edit-reservation/",
            get(show_edit_reservation_form).post(update_reservation),
        )
}
