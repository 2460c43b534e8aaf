use crate::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        BestCustomer, Customer,
    },
    id::CustomerId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    // 顧客を登録し、採番された ID を返す
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId>;
    // 顧客情報を更新する
    async fn update(&self, event: UpdateCustomer) -> AppResult<()>;
    // 全顧客を姓・名の順で取得する
    async fn find_all(&self) -> AppResult<Vec<Customer>>;
    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Customer>;
    // 氏名（または ID）の前方一致で全文検索する
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Customer>>;
    // 予約件数の多い顧客を上位 limit 件取得する
    async fn find_best(&self, limit: i64) -> AppResult<Vec<BestCustomer>>;
}
