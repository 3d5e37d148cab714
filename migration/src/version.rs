//! Bookkeeping table recording which migration steps have been applied.

use sea_orm::entity::prelude::*;
use sea_orm_migration::prelude::{ColumnDef, Table, TableCreateStatement};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "migration_versions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// `CREATE TABLE IF NOT EXISTS migration_versions (version INTEGER PRIMARY KEY)`
pub(crate) fn create_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Entity)
        .if_not_exists()
        .col(
            ColumnDef::new(Column::Version)
                .integer()
                .not_null()
                .primary_key(),
        )
        .to_owned()
}
