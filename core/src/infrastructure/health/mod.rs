use std::time::Instant;

use sea_orm::DatabaseConnection;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, health::ports::HealthCheckRepository,
};

#[derive(Debug, Clone)]
pub struct SeaOrmHealthCheckRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmHealthCheckRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl HealthCheckRepository for SeaOrmHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();

        self.db.ping().await.map_err(|e| {
            error!("Database ping failed: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
