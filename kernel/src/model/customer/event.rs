use super::normalize_notes;
use crate::model::id::CustomerId;

#[derive(Debug)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl CreateCustomer {
    pub fn new(
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            phone: normalize_phone(phone),
            notes: normalize_notes(notes),
        }
    }
}

#[derive(Debug)]
pub struct UpdateCustomer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl UpdateCustomer {
    pub fn new(
        customer_id: CustomerId,
        first_name: String,
        last_name: String,
        phone: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            customer_id,
            first_name,
            last_name,
            phone: normalize_phone(phone),
            notes: normalize_notes(notes),
        }
    }
}

// フォームから空文字で送られてきた電話番号は未入力として扱う
fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone.filter(|p| !p.trim().is_empty())
}
