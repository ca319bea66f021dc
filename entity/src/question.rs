use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub question_text: String,
    #[sea_orm(column_type = "Text")]
    pub option_a: String,
    #[sea_orm(column_type = "Text")]
    pub option_b: String,
    #[sea_orm(column_type = "Text")]
    pub option_c: String,
    #[sea_orm(column_type = "Text")]
    pub option_d: String,
    pub correct_answer: String,
    pub difficulty: String,
    pub topic: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub explanation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::answered_question::Entity")]
    AnsweredQuestion,
}

impl Related<super::answered_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnsweredQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
