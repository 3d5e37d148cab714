use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    TransactionTrait,
};
use sea_orm_migration::{MigrationName, MigrationTrait, SchemaManager};

use crate::version;

/// Applies every step whose version has no row in `migration_versions`.
///
/// Versions are the 1-based position of a step in `steps`. The whole run shares
/// a single transaction: the version table, each applied step and its version row
/// are committed together or not at all. A failing step rolls back everything done
/// in this run, so the next start retries from the last committed state. A panic
/// inside a step rolls back before the panic continues unwinding.
///
/// # Arguments
/// - `db` - Database connection the transaction is opened on
/// - `steps` - Ordered migration steps; never reorder an existing list
///
/// # Returns
/// - `Ok(Vec<i32>)` - Versions applied by this run, in order (empty when up to date)
/// - `Err(DbErr::Migration)` - A step failed; nothing from this run was committed
/// - `Err(DbErr)` - Failed to open, query or commit the transaction
pub async fn run(
    db: &DatabaseConnection,
    steps: &[Box<dyn MigrationTrait>],
) -> Result<Vec<i32>, DbErr> {
    let txn = db.begin().await?;

    let outcome = AssertUnwindSafe(apply(&txn, steps)).catch_unwind().await;

    match outcome {
        Ok(Ok(applied)) => {
            txn.commit().await?;

            if applied.is_empty() {
                tracing::info!("Database schema is up to date");
            } else {
                tracing::info!("Applied migrations {:?}", applied);
            }

            Ok(applied)
        }
        Ok(Err(err)) => {
            tracing::error!("Migration run failed, rolling back: {}", err);
            txn.rollback().await?;
            Err(err)
        }
        Err(panic) => {
            tracing::error!("Migration step panicked, rolling back");
            if let Err(err) = txn.rollback().await {
                tracing::error!("Rollback after panic failed: {}", err);
            }
            std::panic::resume_unwind(panic)
        }
    }
}

async fn apply(
    txn: &DatabaseTransaction,
    steps: &[Box<dyn MigrationTrait>],
) -> Result<Vec<i32>, DbErr> {
    let manager = SchemaManager::new(txn);
    manager
        .create_table(version::create_table_statement())
        .await?;

    let mut applied = Vec::new();

    for (index, step) in steps.iter().enumerate() {
        let version = index as i32 + 1;

        if version::Entity::find_by_id(version).one(txn).await?.is_some() {
            tracing::debug!("Skipping migration v{} ({}), already applied", version, step.name());
            continue;
        }

        step.up(&manager).await.map_err(|err| {
            DbErr::Migration(format!(
                "migration v{} ({}) failed: {}",
                version,
                step.name(),
                err
            ))
        })?;

        version::ActiveModel {
            version: ActiveValue::Set(version),
        }
        .insert(txn)
        .await?;

        tracing::info!("Applied migration v{} ({})", version, step.name());
        applied.push(version);
    }

    Ok(applied)
}
