use async_trait::async_trait;
use uuid::Uuid;

use super::db::DBClient;
use super::page_offset;
use crate::models::{servicemodel::ServiceCategory, workermodel::WorkerProfile};

#[async_trait]
pub trait WorkerExt {
    async fn get_worker_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error>;

    async fn get_worker_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error>;

    async fn get_worker_profiles(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<WorkerProfile>, sqlx::Error>;

    async fn get_worker_count(&self) -> Result<i64, sqlx::Error>;

    async fn save_worker_profile(
        &self,
        user_id: Uuid,
        specialization: Option<String>,
        bio: Option<String>,
        experience: Option<String>,
        categories: Vec<ServiceCategory>,
    ) -> Result<WorkerProfile, sqlx::Error>;

    async fn update_worker_profile(
        &self,
        profile_id: Uuid,
        specialization: Option<String>,
        bio: Option<String>,
        experience: Option<String>,
        categories: Vec<ServiceCategory>,
        is_verified: bool,
    ) -> Result<WorkerProfile, sqlx::Error>;

    async fn delete_worker_profile(&self, profile_id: Uuid) -> Result<u64, sqlx::Error>;
}

#[async_trait]
impl WorkerExt for DBClient {
    async fn get_worker_profile(
        &self,
        profile_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT id, user_id, specialization, rating, completed_orders,
                   bio, experience, categories, is_verified, created_at
            FROM worker_profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_worker_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<WorkerProfile>, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT id, user_id, specialization, rating, completed_orders,
                   bio, experience, categories, is_verified, created_at
            FROM worker_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn get_worker_profiles(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Vec<WorkerProfile>, sqlx::Error> {
        let offset = page_offset(page, limit);

        sqlx::query_as::<_, WorkerProfile>(
            r#"
            SELECT id, user_id, specialization, rating, completed_orders,
                   bio, experience, categories, is_verified, created_at
            FROM worker_profiles
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit as i64)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
    }

    async fn get_worker_count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM worker_profiles")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    async fn save_worker_profile(
        &self,
        user_id: Uuid,
        specialization: Option<String>,
        bio: Option<String>,
        experience: Option<String>,
        categories: Vec<ServiceCategory>,
    ) -> Result<WorkerProfile, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            INSERT INTO worker_profiles (user_id, specialization, bio, experience, categories)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, specialization, rating, completed_orders,
                      bio, experience, categories, is_verified, created_at
            "#,
        )
        .bind(user_id)
        .bind(specialization)
        .bind(bio)
        .bind(experience)
        .bind(categories)
        .fetch_one(&self.pool)
        .await
    }

    async fn update_worker_profile(
        &self,
        profile_id: Uuid,
        specialization: Option<String>,
        bio: Option<String>,
        experience: Option<String>,
        categories: Vec<ServiceCategory>,
        is_verified: bool,
    ) -> Result<WorkerProfile, sqlx::Error> {
        sqlx::query_as::<_, WorkerProfile>(
            r#"
            UPDATE worker_profiles
            SET specialization = $2,
                bio = $3,
                experience = $4,
                categories = $5,
                is_verified = $6
            WHERE id = $1
            RETURNING id, user_id, specialization, rating, completed_orders,
                      bio, experience, categories, is_verified, created_at
            "#,
        )
        .bind(profile_id)
        .bind(specialization)
        .bind(bio)
        .bind(experience)
        .bind(categories)
        .bind(is_verified)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_worker_profile(&self, profile_id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM worker_profiles WHERE id = $1")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
