use std::sync::Arc;

use adapter::repository::customer::CustomerRepositoryImpl;
use adapter::repository::reservation::ReservationRepositoryImpl;
use adapter::{database::ConnectionPool, repository::health::HealthCheckRepositoryImpl};
use kernel::repository::customer::CustomerRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::reservation::ReservationRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    customer_repository: Arc<dyn CustomerRepository>,
    reservation_repository: Arc<dyn ReservationRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let customer_repository = Arc::new(CustomerRepositoryImpl::new(pool.clone()));
        let reservation_repository = Arc::new(ReservationRepositoryImpl::new(pool.clone()));
        Self::with_repositories(
            health_check_repository,
            customer_repository,
            reservation_repository,
        )
    }

    // データベース以外の実装（テスト用のインメモリ実装など）を差し込む場合に使う
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        customer_repository: Arc<dyn CustomerRepository>,
        reservation_repository: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            health_check_repository,
            customer_repository,
            reservation_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn customer_repository(&self) -> Arc<dyn CustomerRepository> {
        self.customer_repository.clone()
    }

    pub fn reservation_repository(&self) -> Arc<dyn ReservationRepository> {
        self.reservation_repository.clone()
    }
}
