//! Migration: Create favorites table.
//!
//! One nullable column per target kind, exactly one populated (CHECK), and a
//! unique index per (user, target column). NULLs never collide in a unique
//! index, so each index only constrains rows of its own kind.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;
use super::m20240101_000002_create_catalog_tables::{Characters, Planets, Starships};
use super::single_target_check;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Favorites::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::CharacterId).integer().null())
                    .col(ColumnDef::new(Favorites::PlanetId).integer().null())
                    .col(ColumnDef::new(Favorites::StarshipId).integer().null())
                    .check(single_target_check())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_user")
                            .from(Favorites::Table, Favorites::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_character")
                            .from(Favorites::Table, Favorites::CharacterId)
                            .to(Characters::Table, Characters::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_planet")
                            .from(Favorites::Table, Favorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorites_starship")
                            .from(Favorites::Table, Favorites::StarshipId)
                            .to(Starships::Table, Starships::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_favorites_user_character", Favorites::CharacterId),
            ("idx_favorites_user_planet", Favorites::PlanetId),
            ("idx_favorites_user_starship", Favorites::StarshipId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Favorites::Table)
                        .col(Favorites::UserId)
                        .col(column)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    CharacterId,
    PlanetId,
    StarshipId,
}
