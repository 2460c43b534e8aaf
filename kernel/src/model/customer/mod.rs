use crate::model::id::CustomerId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// 予約件数ランキングの 1 件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestCustomer {
    pub customer: Customer,
    pub reservation_count: i64,
}

// メモは NULL にせず、未入力は空文字とする
pub fn normalize_notes(notes: Option<String>) -> String {
    notes.unwrap_or_default()
}
