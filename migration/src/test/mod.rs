use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::{MigrationName, MigrationTrait, SchemaManager};

use crate::{run, Migrator};


/// Single-connection in-memory SQLite so every query sees the same database.
async fn connect() -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    Database::connect(opt).await
}

async fn has_table(db: &DatabaseConnection, table: &str) -> Result<bool, DbErr> {
    SchemaManager::new(db).has_table(table).await
}

struct FailingStep;

impl MigrationName for FailingStep {
    fn name(&self) -> &str {
        "failing_step"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for FailingStep {
    async fn up(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Custom("column already exists".to_string()))
    }
}

struct PanickingStep;

impl MigrationName for PanickingStep {
    fn name(&self) -> &str {
        "panicking_step"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for PanickingStep {
    async fn up(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        panic!("step exploded")
    }
}
