//! Migration: Create characters, planets and starships tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Characters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Characters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Characters::Name).string_len(250).null())
                    .col(ColumnDef::new(Characters::Age).integer().null())
                    .col(ColumnDef::new(Characters::Height).integer().null())
                    .col(ColumnDef::new(Characters::EyeColor).string_len(50).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Planets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Planets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Planets::Diameter).integer().null())
                    .col(ColumnDef::new(Planets::Gravity).integer().null())
                    .col(ColumnDef::new(Planets::Population).big_integer().null())
                    .col(ColumnDef::new(Planets::Climate).string_len(250).null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Starships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Starships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Starships::Model).string_len(250).null())
                    .col(ColumnDef::new(Starships::StarshipClass).string_len(250).null())
                    .col(ColumnDef::new(Starships::Crew).integer().null())
                    .col(ColumnDef::new(Starships::Passengers).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Starships::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Planets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Characters::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Characters {
    Table,
    Id,
    Name,
    Age,
    Height,
    EyeColor,
}

#[derive(Iden)]
pub enum Planets {
    Table,
    Id,
    Diameter,
    Gravity,
    Population,
    Climate,
}

#[derive(Iden)]
pub enum Starships {
    Table,
    Id,
    Model,
    StarshipClass,
    Crew,
    Passengers,
}
