use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTimeUtc,
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::game_progress::Entity")]
    GameProgress,
    #[sea_orm(has_many = "super::answered_question::Entity")]
    AnsweredQuestion,
}

impl Related<super::game_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameProgress.def()
    }
}

impl Related<super::answered_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnsweredQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
