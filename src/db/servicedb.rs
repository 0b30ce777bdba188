use async_trait::async_trait;
use bigdecimal::BigDecimal;
use uuid::Uuid;

use super::db::DBClient;
use super::page_offset;
use crate::models::servicemodel::{Service, ServiceCategory, ServiceStatus, ServiceWithWorker};

/// Optional filters from the listing page's search form.
#[derive(Debug, Default, Clone)]
pub struct ServiceSearchFilters {
    pub category: Option<ServiceCategory>,
    pub status: Option<ServiceStatus>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

#[async_trait]
pub trait ServiceExt {
    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error>;

    async fn get_service_with_worker(
        &self,
        service_id: Uuid,
    ) -> Result<Option<ServiceWithWorker>, sqlx::Error>;

    async fn get_services(
        &self,
        filters: ServiceSearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ServiceWithWorker>, sqlx::Error>;

    async fn get_service_count(&self) -> Result<i64, sqlx::Error>;

    #[allow(clippy::too_many_arguments)]
    async fn save_service(
        &self,
        worker_id: Uuid,
        title: String,
        description: String,
        price: BigDecimal,
        category: ServiceCategory,
        location: Option<String>,
        is_remote: bool,
    ) -> Result<Service, sqlx::Error>;

    #[allow(clippy::too_many_arguments)]
    async fn update_service(
        &self,
        service_id: Uuid,
        title: String,
        description: String,
        price: BigDecimal,
        status: ServiceStatus,
        category: ServiceCategory,
        location: Option<String>,
        is_remote: bool,
    ) -> Result<Service, sqlx::Error>;

    async fn delete_service(&self, service_id: Uuid) -> Result<u64, sqlx::Error>;
}

const SERVICE_COLUMNS: &str = r#"
    s.id, s.worker_id, s.title, s.description, s.price,
    s.status, s.category, s.location, s.is_remote,
    s.rating, s.completed_orders, s.created_at, s.updated_at
"#;

#[async_trait]
impl ServiceExt for DBClient {
    async fn get_service(&self, service_id: Uuid) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, worker_id, title, description, price,
                   status, category, location, is_remote,
                   rating, completed_orders, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_service_with_worker(
        &self,
        service_id: Uuid,
    ) -> Result<Option<ServiceWithWorker>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {SERVICE_COLUMNS}, u.name AS worker_name
            FROM services s
            LEFT JOIN worker_profiles wp ON wp.id = s.worker_id
            LEFT JOIN users u ON u.id = wp.user_id
            WHERE s.id = $1
            "#
        );

        sqlx::query_as::<_, ServiceWithWorker>(&query)
            .bind(service_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_services(
        &self,
        filters: ServiceSearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ServiceWithWorker>, sqlx::Error> {
        let offset = page_offset(page, limit);

        let query = format!(
            r#"
            SELECT {SERVICE_COLUMNS}, u.name AS worker_name
            FROM services s
            LEFT JOIN worker_profiles wp ON wp.id = s.worker_id
            LEFT JOIN users u ON u.id = wp.user_id
            WHERE ($1::service_category IS NULL OR s.category = $1)
              AND ($2::service_status IS NULL OR s.status = $2)
              AND ($3::text IS NULL OR s.location ILIKE '%' || $3 || '%')
              AND ($4::boolean IS NULL OR s.is_remote = $4)
              AND ($5::numeric IS NULL OR s.price >= $5)
              AND ($6::numeric IS NULL OR s.price <= $6)
            ORDER BY s.created_at DESC
            LIMIT $7 OFFSET $8
            "#
        );

        sqlx::query_as::<_, ServiceWithWorker>(&query)
            .bind(filters.category)
            .bind(filters.status)
            .bind(filters.location)
            .bind(filters.is_remote)
            .bind(filters.min_price)
            .bind(filters.max_price)
            .bind(limit as i64)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_service_count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM services")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn save_service(
        &self,
        worker_id: Uuid,
        title: String,
        description: String,
        price: BigDecimal,
        category: ServiceCategory,
        location: Option<String>,
        is_remote: bool,
    ) -> Result<Service, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (worker_id, title, description, price, category, location, is_remote)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, worker_id, title, description, price,
                      status, category, location, is_remote,
                      rating, completed_orders, created_at, updated_at
            "#,
        )
        .bind(worker_id)
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(category)
        .bind(location)
        .bind(is_remote)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_service(
        &self,
        service_id: Uuid,
        title: String,
        description: String,
        price: BigDecimal,
        status: ServiceStatus,
        category: ServiceCategory,
        location: Option<String>,
        is_remote: bool,
    ) -> Result<Service, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET title = $2,
                description = $3,
                price = $4,
                status = $5,
                category = $6,
                location = $7,
                is_remote = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, worker_id, title, description, price,
                      status, category, location, is_remote,
                      rating, completed_orders, created_at, updated_at
            "#,
        )
        .bind(service_id)
        .bind(title)
        .bind(description)
        .bind(price)
        .bind(status)
        .bind(category)
        .bind(location)
        .bind(is_remote)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_service(&self, service_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(service_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
