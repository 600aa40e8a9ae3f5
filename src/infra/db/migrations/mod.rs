//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_catalog_tables;
mod m20240101_000003_create_favorites_table;
mod m20240101_000004_create_comments_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_catalog_tables::Migration),
            Box::new(m20240101_000003_create_favorites_table::Migration),
            Box::new(m20240101_000004_create_comments_table::Migration),
        ]
    }
}

/// CHECK expression: exactly one of the three target columns is non-null.
pub(crate) fn single_target_check() -> SimpleExpr {
    Expr::cust(
        "(CASE WHEN character_id IS NULL THEN 0 ELSE 1 END \
         + CASE WHEN planet_id IS NULL THEN 0 ELSE 1 END \
         + CASE WHEN starship_id IS NULL THEN 0 ELSE 1 END) = 1",
    )
}
