use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{CustomerId, ReservationId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // 採番された予約 ID は RETURNING で受け取る
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let reservation_id: ReservationId = sqlx::query_scalar(
            r#"
                INSERT INTO reservations (customer_id, num_guests, start_at, notes)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(event.customer_id)
        .bind(event.num_guests.get())
        .bind(event.start_at)
        .bind(event.notes)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(
            %reservation_id,
            customer_id = %event.customer_id,
            "reservation created"
        );
        Ok(reservation_id)
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    num_guests = $1,
                    start_at = $2,
                    notes = $3
                WHERE id = $4
            "#,
        )
        .bind(event.num_guests.get())
        .bind(event.start_at)
        .bind(event.notes)
        .bind(event.reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "No such reservation: {}",
                event.reservation_id
            )));
        }

        tracing::info!(reservation_id = %event.reservation_id, "reservation updated");
        Ok(())
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Reservation> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, num_guests, start_at, notes
                FROM reservations
                WHERE id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound(format!("No such reservation: {reservation_id}")))
        .and_then(Reservation::try_from)
    }

    // 顧客 ID に紐づく予約を開始日時の古い順に取得する
    async fn find_by_customer_id(&self, customer_id: CustomerId) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, num_guests, start_at, notes
                FROM reservations
                WHERE customer_id = $1
                ORDER BY start_at ASC, id ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_most_recent_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT id, customer_id, num_guests, start_at, notes
                FROM reservations
                WHERE customer_id = $1
                ORDER BY start_at DESC
                LIMIT 1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Reservation::try_from)
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::customer::CustomerRepositoryImpl;
    use chrono::{Local, TimeZone};
    use kernel::model::{customer::event::CreateCustomer, reservation::NumGuests};
    use kernel::repository::customer::CustomerRepository;

    async fn setup(pool: sqlx::PgPool) -> anyhow::Result<(ReservationRepositoryImpl, CustomerId)> {
        let db = ConnectionPool::new(pool);
        let customer_id = CustomerRepositoryImpl::new(db.clone())
            .create(CreateCustomer::new(
                "Alice".into(),
                "Smith".into(),
                None,
                None,
            ))
            .await?;
        Ok((ReservationRepositoryImpl::new(db), customer_id))
    }

    #[sqlx::test]
    async fn test_create_and_find_reservations(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (repo, customer_id) = setup(pool).await?;
        let start_at = Local.with_ymd_and_hms(2024, 6, 5, 12, 30, 0).unwrap();

        let reservation_id = repo
            .create(CreateReservation::new(
                customer_id,
                NumGuests::new(4)?,
                start_at,
                Some("birthday".into()),
            ))
            .await?;

        let res = repo.find_by_customer_id(customer_id).await?;
        assert_eq!(res.len(), 1);
        let Reservation {
            id,
            customer_id: owner,
            num_guests,
            start_at: stored_start_at,
            notes,
        } = &res[0];
        assert_eq!(*id, reservation_id);
        assert_eq!(*owner, customer_id);
        assert_eq!(num_guests.get(), 4);
        assert_eq!(*stored_start_at, start_at);
        assert_eq!(notes, "birthday");
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_most_recent(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (repo, customer_id) = setup(pool).await?;
        assert!(repo
            .find_most_recent_by_customer_id(customer_id)
            .await?
            .is_none());

        for day in [3, 20, 11] {
            repo.create(CreateReservation::new(
                customer_id,
                NumGuests::new(2)?,
                Local.with_ymd_and_hms(2024, 6, day, 19, 0, 0).unwrap(),
                None,
            ))
            .await?;
        }

        let recent = repo
            .find_most_recent_by_customer_id(customer_id)
            .await?
            .expect("customer has reservations");
        assert_eq!(
            recent.start_at,
            Local.with_ymd_and_hms(2024, 6, 20, 19, 0, 0).unwrap()
        );
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_then_refetch(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (repo, customer_id) = setup(pool).await?;
        let reservation_id = repo
            .create(CreateReservation::new(
                customer_id,
                NumGuests::new(2)?,
                Local.with_ymd_and_hms(2024, 6, 5, 12, 30, 0).unwrap(),
                None,
            ))
            .await?;

        let moved_to = Local.with_ymd_and_hms(2024, 7, 1, 20, 15, 0).unwrap();
        repo.update(UpdateReservation::new(
            reservation_id,
            NumGuests::new(6)?,
            moved_to,
            Some("needs high chair".into()),
        ))
        .await?;

        let updated = repo.find_by_id(reservation_id).await?;
        assert_eq!(updated.customer_id, customer_id);
        assert_eq!(updated.num_guests.get(), 6);
        assert_eq!(updated.start_at, moved_to);
        assert_eq!(updated.notes, "needs high chair");
        Ok(())
    }

    #[sqlx::test]
    async fn test_unknown_reservation(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let (repo, _) = setup(pool).await?;

        let res = repo.find_by_id(ReservationId::new(9999)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));

        let res = repo
            .update(UpdateReservation::new(
                ReservationId::new(9999),
                NumGuests::new(2)?,
                Local.with_ymd_and_hms(2024, 6, 5, 12, 30, 0).unwrap(),
                None,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
