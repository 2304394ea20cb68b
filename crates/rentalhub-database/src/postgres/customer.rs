//! Customer repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use rentalhub_core::error::{AppError, ErrorKind};
use rentalhub_core::result::AppResult;
use rentalhub_core::types::{CustomerFilter, CustomerId, SortSpec};
use rentalhub_entity::{Customer, CustomerSortKey, NewCustomer, UpdateCustomer};

use super::{begin_failed, commit_failed, count_active_for_customer, lock_customer};
use crate::store::CustomerStore;

/// Repository for the `customers` table.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find customer", e))
    }

    async fn find_all(
        &self,
        filter: &CustomerFilter,
        sort: &SortSpec<CustomerSortKey>,
    ) -> AppResult<Vec<Customer>> {
        let sql = format!(
            "SELECT * FROM customers \
             WHERE ($1::TEXT IS NULL OR strpos(name, $1) > 0) \
             AND ($2::TEXT IS NULL OR strpos(postal_code, $2) > 0) \
             ORDER BY {}",
            sort.to_sql()
        );
        sqlx::query_as::<_, Customer>(&sql)
            .bind(filter.name.as_deref())
            .bind(filter.postal_code.as_deref())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list customers", e))
    }

    async fn create(&self, data: &NewCustomer) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (name, postal_code, phone) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.postal_code)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create customer", e))
    }

    async fn update(
        &self,
        id: CustomerId,
        data: &UpdateCustomer,
    ) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>(
            "UPDATE customers SET name = $2, \
             postal_code = COALESCE($3, postal_code), \
             phone = COALESCE($4, phone) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.postal_code.as_deref())
        .bind(data.phone.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update customer", e))
    }

    async fn delete(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let mut tx = self.pool.begin().await.map_err(begin_failed)?;

        let Some(customer) = lock_customer(&mut tx, id, true).await? else {
            return Ok(None);
        };
        let active = count_active_for_customer(&mut tx, id).await?;
        if active > 0 {
            return Err(AppError::state(format!(
                "Customer {id} still holds {active} rented copies"
            )));
        }

        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete customer", e)
            })?;

        tx.commit().await.map_err(commit_failed)?;
        Ok(Some(customer))
    }
}
