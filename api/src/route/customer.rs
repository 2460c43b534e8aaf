use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::customer::{
    register_customer, show_best_customers, show_customer, show_customer_list,
    show_edit_customer_form, show_new_customer_form, update_customer,
};

pub fn build_customer_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(show_customer_list))
        .route("/best", get(show_best_customers))
        .route("/add/", get(show_new_customer_form).post(register_customer))
        .route("/:customer_id/", get(show_customer))
        .route(
            "/:customer_id/edit/",
            get(show_edit_customer_form).post(update_customer),
        )
}
