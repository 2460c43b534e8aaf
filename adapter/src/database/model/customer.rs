use kernel::model::{
    customer::{normalize_notes, BestCustomer, Customer},
    id::CustomerId,
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct CustomerRow {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(value: CustomerRow) -> Self {
        let CustomerRow {
            id,
            first_name,
            last_name,
            phone,
            notes,
        } = value;
        Customer {
            id,
            first_name,
            last_name,
            phone,
            notes: normalize_notes(notes),
        }
    }
}

// 予約件数ランキングの取得に使う型
#[derive(FromRow)]
pub struct BestCustomerRow {
    #[sqlx(flatten)]
    pub customer: CustomerRow,
    pub reservation_count: i64,
}

impl From<BestCustomerRow> for BestCustomer {
    fn from(value: BestCustomerRow) -> Self {
        let BestCustomerRow {
            customer,
            reservation_count,
        } = value;
        BestCustomer {
            customer: customer.into(),
            reservation_count,
        }
    }
}
