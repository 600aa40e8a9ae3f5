//! Character database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Character, CharacterDraft};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub height: Option<i32>,
    pub eye_color: Option<String>,
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

impl From<Model> for Character {
    fn from(model: Model) -> Self {
        Character {
            id: model.id,
            name: model.name,
            age: model.age,
            height: model.height,
            eye_color: model.eye_color,
        }
    }
}

impl ActiveModel {
    /// Fresh row built from a draft; the id is assigned by the store.
    pub fn from_draft(draft: CharacterDraft) -> Self {
        let mut active = Self {
            id: NotSet,
            name: NotSet,
            age: NotSet,
            height: NotSet,
            eye_color: NotSet,
        };
        active.apply(draft);
        active
    }

    /// Overwrite every attribute with the draft's values.
    pub fn apply(&mut self, draft: CharacterDraft) {
        self.name = Set(draft.name);
        self.age = Set(draft.age);
        self.height = Set(draft.height);
        self.eye_color = Set(draft.eye_color);
    }
}
