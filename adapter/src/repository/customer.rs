use crate::database::{
    model::customer::{BestCustomerRow, CustomerRow},
    search::prefix_tsquery,
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    customer::{
        event::{CreateCustomer, UpdateCustomer},
        BestCustomer, Customer,
    },
    id::CustomerId,
};
use kernel::repository::customer::CustomerRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CustomerRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CustomerRepository for CustomerRepositoryImpl {
    async fn create(&self, event: CreateCustomer) -> AppResult<CustomerId> {
        let customer_id: CustomerId = sqlx::query_scalar(
            r#"
                INSERT INTO customers (first_name, last_name, phone, notes)
                VALUES ($1, $2, $3, $4)
                RETURNING id
            "#,
        )
        .bind(event.first_name)
        .bind(event.last_name)
        .bind(event.phone)
        .bind(event.notes)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(%customer_id, "customer created");
        Ok(customer_id)
    }

    async fn update(&self, event: UpdateCustomer) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE customers
                SET
                    first_name = $1,
                    last_name = $2,
                    phone = $3,
                    notes = $4
                WHERE id = $5
            "#,
        )
        .bind(event.first_name)
        .bind(event.last_name)
        .bind(event.phone)
        .bind(event.notes)
        .bind(event.customer_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "No such customer: {}",
                event.customer_id
            )));
        }

        tracing::info!(customer_id = %event.customer_id, "customer updated");
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Customer>> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, first_name, last_name, phone, notes
                FROM customers
                ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Customer::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, customer_id: CustomerId) -> AppResult<Customer> {
        sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, first_name, last_name, phone, notes
                FROM customers
                WHERE id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Customer::from)
        .ok_or_else(|| AppError::EntityNotFound(format!("No such customer: {customer_id}")))
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Customer>> {
        // 検索語が記号だけの場合はクエリを発行しない
        let Some(tsquery) = prefix_tsquery(term) else {
            tracing::debug!(term, "search term has no searchable words");
            return Ok(Vec::new());
        };

        // 氏名に加え、ID を文字列化したものも検索対象とする
        sqlx::query_as::<_, CustomerRow>(
            r#"
                SELECT id, first_name, last_name, phone, notes
                FROM customers
                WHERE to_tsvector('simple', first_name || ' ' || last_name)
                      @@ to_tsquery('simple', $1)
                   OR to_tsvector('simple', CAST(id AS VARCHAR(20)))
                      @@ to_tsquery('simple', $1)
                ORDER BY last_name, first_name
            "#,
        )
        .bind(tsquery)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Customer::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_best(&self, limit: i64) -> AppResult<Vec<BestCustomer>> {
        // 予約が 1 件もない顧客は INNER JOIN により対象外となる
        // 件数が同じ場合は ID の昇順に並べる
        sqlx::query_as::<_, BestCustomerRow>(
            r#"
                SELECT
                    c.id,
                    c.first_name,
                    c.last_name,
                    c.phone,
                    c.notes,
                    COUNT(*) AS reservation_count
                FROM customers AS c
                INNER JOIN reservations AS r ON r.customer_id = c.id
                GROUP BY c.id
                ORDER BY reservation_count DESC, c.id ASC
                LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(BestCustomer::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::reservation::ReservationRepositoryImpl;
    use chrono::{Duration, Local, TimeZone};
    use kernel::model::reservation::{event::CreateReservation, NumGuests};
    use kernel::repository::reservation::ReservationRepository;

    fn new_customer(first_name: &str, last_name: &str) -> CreateCustomer {
        CreateCustomer::new(first_name.into(), last_name.into(), None, None)
    }

    async fn add_reservations(
        repo: &ReservationRepositoryImpl,
        customer_id: CustomerId,
        count: i64,
    ) -> anyhow::Result<()> {
        let base = Local.with_ymd_and_hms(2024, 6, 5, 18, 0, 0).unwrap();
        for i in 0..count {
            repo.create(CreateReservation::new(
                customer_id,
                NumGuests::new(2)?,
                base + Duration::days(i),
                None,
            ))
            .await?;
        }
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_and_find_customer(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));

        let customer_id = repo
            .create(CreateCustomer::new(
                "Alice".into(),
                "Smith".into(),
                Some("555-0100".into()),
                None,
            ))
            .await?;

        let Customer {
            id,
            first_name,
            last_name,
            phone,
            notes,
        } = repo.find_by_id(customer_id).await?;
        assert_eq!(id, customer_id);
        assert_eq!(first_name, "Alice");
        assert_eq!(last_name, "Smith");
        assert_eq!(phone.as_deref(), Some("555-0100"));
        assert_eq!(notes, "");
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_unknown_customer(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo.find_by_id(CustomerId::new(9999)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(msg)) if msg.contains("9999")));
        Ok(())
    }

    #[sqlx::test]
    async fn test_update_customer(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));
        let customer_id = repo.create(new_customer("Bob", "Jones")).await?;

        repo.update(UpdateCustomer::new(
            customer_id,
            "Robert".into(),
            "Jones".into(),
            Some("555-0199".into()),
            Some("prefers the patio".into()),
        ))
        .await?;

        let customer = repo.find_by_id(customer_id).await?;
        assert_eq!(customer.full_name(), "Robert Jones");
        assert_eq!(customer.phone.as_deref(), Some("555-0199"));
        assert_eq!(customer.notes, "prefers the patio");

        let res = repo
            .update(UpdateCustomer::new(
                CustomerId::new(9999),
                "No".into(),
                "Body".into(),
                None,
                None,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_all_orders_by_last_then_first_name(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));
        for (first, last) in [("Zoe", "Adams"), ("Bob", "Jones"), ("Amy", "Adams")] {
            repo.create(new_customer(first, last)).await?;
        }

        let names: Vec<String> = repo
            .find_all()
            .await?
            .iter()
            .map(Customer::full_name)
            .collect();
        assert_eq!(names, ["Amy Adams", "Zoe Adams", "Bob Jones"]);
        Ok(())
    }

    #[sqlx::test]
    async fn test_search_by_name_uses_word_prefixes(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));
        let alice = repo.create(new_customer("Alice", "Smith")).await?;
        repo.create(new_customer("Alan", "Smithers")).await?;
        repo.create(new_customer("Bob", "Jones")).await?;

        let names = |customers: Vec<Customer>| -> Vec<String> {
            customers.iter().map(Customer::full_name).collect()
        };

        assert_eq!(
            names(repo.search_by_name("smi").await?),
            ["Alice Smith", "Alan Smithers"]
        );
        assert_eq!(names(repo.search_by_name("AL smith").await?), ["Alice Smith", "Alan Smithers"]);
        assert_eq!(names(repo.search_by_name("alic").await?), ["Alice Smith"]);
        // 部分文字列ではなく単語の前方一致
        assert!(repo.search_by_name("mith").await?.is_empty());
        assert!(repo.search_by_name("!!").await?.is_empty());

        let by_id = repo.search_by_name(&alice.to_string()).await?;
        assert!(by_id.iter().any(|c| c.id == alice));
        Ok(())
    }

    #[sqlx::test]
    async fn test_search_by_name_keeps_dotted_names_whole(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = CustomerRepositoryImpl::new(ConnectionPool::new(pool));
        let mary = repo.create(new_customer("Mary", "St.John")).await?;
        repo.create(new_customer("John", "Smith")).await?;

        let found = repo.search_by_name("St.John").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mary);

        let found = repo.search_by_name("mary st.john").await?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, mary);
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_best_ranks_by_reservation_count(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let customers = CustomerRepositoryImpl::new(db.clone());
        let reservations = ReservationRepositoryImpl::new(db);

        let bob = customers.create(new_customer("Bob", "Jones")).await?;
        let alice = customers.create(new_customer("Alice", "Smith")).await?;
        customers.create(new_customer("Carol", "White")).await?;
        add_reservations(&reservations, bob, 1).await?;
        add_reservations(&reservations, alice, 3).await?;

        let best = customers.find_best(10).await?;
        let ranking: Vec<(CustomerId, i64)> = best
            .iter()
            .map(|b| (b.customer.id, b.reservation_count))
            .collect();
        assert_eq!(ranking, [(alice, 3), (bob, 1)]);
        Ok(())
    }

    #[sqlx::test]
    async fn test_find_best_respects_limit(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let customers = CustomerRepositoryImpl::new(db.clone());
        let reservations = ReservationRepositoryImpl::new(db);

        for i in 0..12 {
            let id = customers
                .create(new_customer("Guest", &format!("Number{i}")))
                .await?;
            add_reservations(&reservations, id, i % 4 + 1).await?;
        }

        let best = customers.find_best(10).await?;
        assert_eq!(best.len(), 10);
        assert!(best
            .windows(2)
            .all(|pair| pair[0].reservation_count >= pair[1].reservation_count));
        Ok(())
    }
}
