use axum::Router;
use registry::AppRegistry;

pub mod customer;
pub mod health;
pub mod reservation;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(customer::build_customer_routers())
        .merge(reservation::build_reservation_routers())
}
