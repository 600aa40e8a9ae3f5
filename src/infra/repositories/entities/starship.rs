//! Starship database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Starship, StarshipDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "starships")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model: Option<String>,
    pub starship_class: Option<String>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
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

impl From<Model> for Starship {
    fn from(model: Model) -> Self {
        Starship {
            id: model.id,
            model: model.model,
            starship_class: model.starship_class,
            crew: model.crew,
            passengers: model.passengers,
        }
    }
}

impl ActiveModel {
    /// Fresh row built from a draft; the id is assigned by the store.
    pub fn from_draft(draft: StarshipDraft) -> Self {
        let mut active = Self {
            id: NotSet,
            model: NotSet,
            starship_class: NotSet,
            crew: NotSet,
            passengers: NotSet,
        };
        active.apply(draft);
        active
    }

    /// Overwrite every attribute with the draft's values.
    pub fn apply(&mut self, draft: StarshipDraft) {
        self.model = Set(draft.model);
        self.starship_class = Set(draft.starship_class);
        self.crew = Set(draft.crew);
        self.passengers = Set(draft.passengers);
    }
}
