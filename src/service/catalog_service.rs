use std::sync::Arc;

use uuid::Uuid;

use crate::{
    db::{
        db::DBClient,
        servicedb::{ServiceExt, ServiceSearchFilters},
        workerdb::WorkerExt,
    },
    dtos::servicedtos::{CreateServiceDto, UpdateServiceDto},
    models::servicemodel::{Service, ServiceWithWorker},
    service::error::ServiceError,
};

/// Application service for the listings catalog. Handlers go through this
/// rather than hitting the repository traits directly.
#[derive(Debug, Clone)]
pub struct CatalogService {
    db_client: Arc<DBClient>,
}

impl CatalogService {
    pub fn new(db_client: Arc<DBClient>) -> Self {
        Self { db_client }
    }

    pub async fn list_services(
        &self,
        filters: ServiceSearchFilters,
        page: u32,
        limit: usize,
    ) -> Result<Vec<ServiceWithWorker>, ServiceError> {
        let services = self.db_client.get_services(filters, page, limit).await?;
        Ok(services)
    }

    pub async fn get_service(&self, service_id: Uuid) -> Result<ServiceWithWorker, ServiceError> {
        self.db_client
            .get_service_with_worker(service_id)
            .await?
            .ok_or(ServiceError::ServiceNotFound(service_id))
    }

    pub async fn create_service(&self, body: CreateServiceDto) -> Result<Service, ServiceError> {
        // A listing must hang off an existing worker profile.
        self.db_client
            .get_worker_profile(body.worker_id)
            .await?
            .ok_or(ServiceError::WorkerProfileNotFound(body.worker_id))?;

        let service = self
            .db_client
            .save_service(
                body.worker_id,
                body.title,
                body.description,
                body.price,
                body.category,
                body.location,
                body.is_remote,
            )
            .await?;

        tracing::info!(service_id = %service.id, "created service listing");

        Ok(service)
    }

    pub async fn update_service(
        &self,
        service_id: Uuid,
        body: UpdateServiceDto,
    ) -> Result<Service, ServiceError> {
        self.db_client
            .get_service(service_id)
            .await?
            .ok_or(ServiceError::ServiceNotFound(service_id))?;

        let service = self
            .db_client
            .update_service(
                service_id,
                body.title,
                body.description,
                body.price,
                body.status,
                body.category,
                body.location,
                body.is_remote,
            )
            .await?;

        Ok(service)
    }

    pub async fn delete_service(&self, service_id: Uuid) -> Result<(), ServiceError> {
        let deleted = self.db_client.delete_service(service_id).await?;
        if deleted == 0 {
            return Err(ServiceError::ServiceNotFound(service_id));
        }

        tracing::info!(service_id = %service_id, "deleted service listing");

        Ok(())
    }
}
