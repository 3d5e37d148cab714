pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_initial_schema;
mod m20250301_000002_create_comment_table;
mod runner;
mod version;

#[cfg(test)]
mod test;

pub use runner::run;

use sea_orm::DatabaseConnection;

pub struct Migrator;

impl Migrator {
    /// Schema steps in application order. Append only: a step's position is its version.
    pub fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_initial_schema::Migration),
            Box::new(m20250301_000002_create_comment_table::Migration),
        ]
    }

    /// Brings the schema to the latest version, returning the versions applied by this call.
    pub async fn up(db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
        run(db, &Self::migrations()).await
    }
}
