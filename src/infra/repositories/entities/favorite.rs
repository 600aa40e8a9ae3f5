//! Favorite database entity for SeaORM.
//!
//! Exactly one of the three target columns is set (CHECK constraint in the
//! migration); the domain conversion rejects rows that break this.

use sea_orm::entity::prelude::*;

use crate::domain::{Favorite, Target};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub starship_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::character::Entity",
        from = "Column::CharacterId",
        to = "super::character::Column::Id"
    )]
    Character,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::starship::Entity",
        from = "Column::StarshipId",
        to = "super::starship::Column::Id"
    )]
    Starship,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::starship::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starship.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column holding the id for a given target kind
pub fn target_column(target: &Target) -> Column {
    match target {
        Target::Character(_) => Column::CharacterId,
        Target::Planet(_) => Column::PlanetId,
        Target::Starship(_) => Column::StarshipId,
    }
}

impl TryFrom<Model> for Favorite {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let target = Target::from_columns(model.character_id, model.planet_id, model.starship_id)
            .ok_or_else(|| {
                AppError::internal(format!("favorite {} does not have exactly one target", model.id))
            })?;

        Ok(Favorite {
            id: model.id,
            user_id: model.user_id,
            target,
        })
    }
}
