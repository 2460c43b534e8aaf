use crate::model::{
    id::{CustomerId, ReservationId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // 予約を登録し、採番された ID を返す
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    // 人数・開始日時・メモを更新する
    async fn update(&self, event: UpdateReservation) -> AppResult<()>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Reservation>;
    // 顧客 ID に紐づく予約一覧を取得する
    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>>;
    // 顧客の直近（開始日時が最も遅い）の予約を取得する
    async fn find_most_recent_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> AppResult<Option<Reservation>>;
}
