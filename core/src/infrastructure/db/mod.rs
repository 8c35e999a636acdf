use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};
use tracing::info;

use crate::entity::{generated_recipes, recipe_analyses};

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Db {
    db: DatabaseConnection,
}

impl Db {
    pub async fn new(config: DbConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);

        // Every pooled connection to an in-memory SQLite database gets its
        // own empty database.
        if config.database_url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        let db = Database::connect(options).await?;
        info!("connected to database");

        Ok(Self { db })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Creates the history tables when they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        create_table_if_missing(&self.db, recipe_analyses::Entity).await?;
        create_table_if_missing(&self.db, generated_recipes::Entity).await?;

        Ok(())
    }
}

async fn create_table_if_missing<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    let mut statement = schema.create_table_from_entity(entity);

    db.execute(backend.build(statement.if_not_exists())).await?;

    Ok(())
}
