use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::db::DBClient;
use super::page_offset;
use crate::models::ordermodel::{NewOrder, Order, OrderStatus, OrderWithDetails};

#[async_trait]
pub trait OrderExt {
    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>, sqlx::Error>;

    async fn get_order_with_details(
        &self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithDetails>, sqlx::Error>;

    async fn get_orders(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<OrderWithDetails>, sqlx::Error>;

    async fn get_order_count(&self) -> Result<i64, sqlx::Error>;

    async fn save_order(&self, order: NewOrder) -> Result<Order, sqlx::Error>;

    async fn update_order(
        &self,
        order_id: Uuid,
        status: OrderStatus,
        worker_notes: Option<String>,
        scheduled_date: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Order, sqlx::Error>;

    async fn delete_order(&self, order_id: Uuid) -> Result<u64, sqlx::Error>;
}

const ORDER_COLUMNS: &str = r#"
    o.id, o.service_id, o.customer_id, o.status,
    o.scheduled_date, o.completed_at, o.customer_notes, o.worker_notes,
    o.total_price, o.address, o.contact_phone, o.created_at
"#;

#[async_trait]
impl OrderExt for DBClient {
    async fn get_order(&self, order_id: Uuid) -> Result<Option<Order>, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            SELECT id, service_id, customer_id, status,
                   scheduled_date, completed_at, customer_notes, worker_notes,
                   total_price, address, contact_phone, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_order_with_details(
        &self,
        order_id: Uuid,
    ) -> Result<Option<OrderWithDetails>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {ORDER_COLUMNS}, s.title AS service_title, u.name AS customer_name
            FROM orders o
            LEFT JOIN services s ON s.id = o.service_id
            LEFT JOIN users u ON u.id = o.customer_id
            WHERE o.id = $1
            "#
        );

        sqlx::query_as::<_, OrderWithDetails>(&query)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_orders(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<OrderWithDetails>, sqlx::Error> {
        let offset = page_offset(page, limit);

        let query = format!(
            r#"
            SELECT {ORDER_COLUMNS}, s.title AS service_title, u.name AS customer_name
            FROM orders o
            LEFT JOIN services s ON s.id = o.service_id
            LEFT JOIN users u ON u.id = o.customer_id
            ORDER BY o.created_at DESC
            LIMIT $1 OFFSET $2
            "#
        );

        sqlx::query_as::<_, OrderWithDetails>(&query)
            .bind(limit as i64)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_order_count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn save_order(&self, order: NewOrder) -> Result<Order, sqlx::Error> {
        sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (service_id, customer_id, scheduled_date, customer_notes,
                                address, contact_phone, total_price)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, service_id, customer_id, status,
                      scheduled_date, completed_at, customer_notes, worker_notes,
                      total_price, address, contact_phone, created_at
            "#,
        )
        .bind(order.service_id)
        .bind(order.customer_id)
        .bind(order.scheduled_date)
        .bind(order.customer_notes)
        .bind(order.address)
        .bind(order.contact_phone)
        .bind(order.total_price)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_order(
        &self,
        order_id: Uuid,
        status: OrderStatus,
        worker_notes: Option<String>,
        scheduled_date: Option<DateTime<Utc>>,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Order, sqlx::Error> {
        // completed_at arrives stamped only when the order moves to
        // completed; COALESCE keeps the stored value otherwise.
        sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders
            SET status = $2,
                worker_notes = $3,
                scheduled_date = $4,
                completed_at = COALESCE($5, completed_at)
            WHERE id = $1
            RETURNING id, service_id, customer_id, status,
                      scheduled_date, completed_at, customer_notes, worker_notes,
                      total_price, address, contact_phone, created_at
            "#,
        )
        .bind(order_id)
        .bind(status)
        .bind(worker_notes)
        .bind(scheduled_date)
        .bind(completed_at)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_order(&self, order_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
