//! Planet database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Planet, PlanetDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub diameter: Option<i32>,
    pub gravity: Option<i32>,
    pub population: Option<i64>,
    pub climate: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
    #[sea_orm(has_many = "super::comment::Entity")]
    Comment,
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl Related<super::comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Planet {
    fn from(model: Model) -> Self {
        Planet {
            id: model.id,
            diameter: model.diameter,
            gravity: model.gravity,
            population: model.population,
            climate: model.climate,
        }
    }
}

impl ActiveModel {
    /// Fresh row built from a draft; the id is assigned by the store.
    pub fn from_draft(draft: PlanetDraft) -> Self {
        let mut active = Self {
            id: NotSet,
            diameter: NotSet,
            gravity: NotSet,
            population: NotSet,
            climate: NotSet,
        };
        active.apply(draft);
        active
    }

    /// Overwrite every attribute with the draft's values.
    pub fn apply(&mut self, draft: PlanetDraft) {
        self.diameter = Set(draft.diameter);
        self.gravity = Set(draft.gravity);
        self.population = Set(draft.population);
        self.climate = Set(draft.climate);
    }
}
