use kernel::model::id::CustomerId;

pub mod customer;
pub mod health;
pub mod reservation;

// 顧客詳細画面へのパス
pub(crate) fn customer_path(customer_id: CustomerId) -> String {
    format!("/{customer_id}/")
}
