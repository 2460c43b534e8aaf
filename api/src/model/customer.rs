use derive_new::new;
use garde::Validate;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        BestCustomer, Customer,
    },
    id::CustomerId,
    reservation::Reservation,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    pub search: Option<String>,
}

impl CustomerListQuery {
    // 空白だけの検索語は未指定として扱う
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerForm {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
}

impl From<CreateCustomerForm> for CreateCustomer {
    fn from(value: CreateCustomerForm) -> Self {
        let CreateCustomerForm {
            first_name,
            last_name,
            phone,
            notes,
        } = value;
        CreateCustomer::new(first_name, last_name, phone, notes)
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerForm {
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub notes: Option<String>,
}

#[derive(new)]
pub struct UpdateCustomerFormWithId(CustomerId, UpdateCustomerForm);

impl From<UpdateCustomerFormWithId> for UpdateCustomer {
    fn from(value: UpdateCustomerFormWithId) -> Self {
        let UpdateCustomerFormWithId(
            customer_id,
            UpdateCustomerForm {
                first_name,
                last_name,
                phone,
                notes,
            },
        ) = value;
        UpdateCustomer::new(customer_id, first_name, last_name, phone, notes)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub notes: String,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        let full_name = value.full_name();
        let Customer {
            id,
            first_name,
            last_name,
            phone,
            notes,
        } = value;
        Self {
            id,
            first_name,
            last_name,
            full_name,
            phone,
            notes,
        }
    }
}

// 一覧画面の 1 行分。直近の予約日時を添える
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListItemResponse {
    pub customer: CustomerResponse,
    pub most_recent_start_at: Option<String>,
}

impl CustomerListItemResponse {
    pub fn new(customer: Customer, most_recent: Option<Reservation>) -> Self {
        Self {
            customer: customer.into(),
            most_recent_start_at: most_recent.as_ref().map(Reservation::summary_start_at),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BestCustomerResponse {
    pub customer: CustomerResponse,
    pub reservation_count: i64,
}

impl From<BestCustomer> for BestCustomerResponse {
    fn from(value: BestCustomer) -> Self {
        let BestCustomer {
            customer,
            reservation_count,
        } = value;
        Self {
            customer: customer.into(),
            reservation_count,
        }
    }
}
