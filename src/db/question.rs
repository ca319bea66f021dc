use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::question::{ByDifficulty, Difficulty, QuestionSeed, QuestionStatsRes, RAnswerQuestion};
use chrono::Utc;
use entity::answered_question::{
    ActiveModel as AnsweredActive, Column as AnsweredColumn, Entity as AnsweredQuestion,
    Model as AnsweredModel,
};
use entity::question::{ActiveModel as QuestionActive, Column, Entity as Question, Model as QuestionModel};
use rand::seq::SliceRandom;
use rand::Rng;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set, TransactionTrait,
};
use tracing::info;

/// What a question pick should look for.
#[derive(Debug, Clone, Default)]
pub struct QuestionFilter {
    pub difficulty: String,
    /// Caller whose answered questions are off limits.
    pub user_id: Option<i32>,
    /// Extra ids the client wants skipped. Only honoured for the tier pick.
    pub exclude_ids: Vec<i32>,
}

/// Uniform pick from the candidates.
pub fn pick_question<R: Rng + ?Sized>(candidates: &[QuestionModel], rng: &mut R) -> Option<QuestionModel> {
    candidates.choose(rng).cloned()
}

fn excluding(query: Select<Question>, ids: &[i32]) -> Select<Question> {
    if ids.is_empty() {
        query
    } else {
        query.filter(Column::Id.is_not_in(ids.to_vec()))
    }
}

impl DatabaseService {
    pub async fn get_question(&self, id: i32) -> Result<Option<QuestionModel>, AppError> {
        Ok(Question::find_by_id(id).one(&self.database_connection).await?)
    }

    pub async fn answered_question_ids(&self, user_id: i32) -> Result<Vec<i32>, AppError> {
        Ok(AnsweredQuestion::find()
            .select_only()
            .column(AnsweredColumn::QuestionId)
            .filter(AnsweredColumn::UserId.eq(user_id))
            .into_tuple::<i32>()
            .all(&self.database_connection)
            .await?)
    }

    /// Unseen questions of the requested tier, or any unseen question when
    /// the tier has run dry.
    pub async fn question_candidates(&self, filter: &QuestionFilter) -> Result<Vec<QuestionModel>, AppError> {
        let answered = match filter.user_id {
            Some(uid) => self.answered_question_ids(uid).await?,
            None => Vec::new(),
        };

        let tier = Question::find().filter(Column::Difficulty.eq(filter.difficulty.as_str()));
        let tier = excluding(excluding(tier, &answered), &filter.exclude_ids);
        let candidates = tier
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        Ok(excluding(Question::find(), &answered)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn random_question(&self, filter: &QuestionFilter) -> Result<QuestionModel, AppError> {
        let candidates = self.question_candidates(filter).await?;
        pick_question(&candidates, &mut rand::thread_rng())
            .ok_or_else(|| AppError::NotFound("No questions available".into()))
    }

    /// One record per (user, question); answering again overwrites it.
    pub async fn record_answer(&self, user_id: i32, answer: RAnswerQuestion) -> Result<AnsweredModel, AppError> {
        if self.get_question(answer.question_id).await?.is_none() {
            return Err(AppError::NotFound("Question not found".into()));
        }

        let existing = AnsweredQuestion::find()
            .filter(AnsweredColumn::UserId.eq(user_id))
            .filter(AnsweredColumn::QuestionId.eq(answer.question_id))
            .one(&self.database_connection)
            .await?;

        if let Some(existing) = existing {
            let mut am: AnsweredActive = existing.into();
            am.answered_correctly = Set(answer.answered_correctly);
            // room 0 counts as "not given"
            if let Some(room) = answer.room_number.filter(|r| *r != 0) {
                am.room_number = Set(Some(room));
            }
            return Ok(am.update(&self.database_connection).await?);
        }

        Ok(AnsweredActive {
            user_id: Set(user_id),
            question_id: Set(answer.question_id),
            answered_correctly: Set(answer.answered_correctly),
            answered_at: Set(Utc::now()),
            room_number: Set(answer.room_number),
            ..Default::default()
        }
        .insert(&self.database_connection)
        .await?)
    }

    pub async fn list_answered(&self, user_id: i32) -> Result<Vec<AnsweredModel>, AppError> {
        Ok(AnsweredQuestion::find()
            .filter(AnsweredColumn::UserId.eq(user_id))
            .order_by_asc(AnsweredColumn::Id)
            .all(&self.database_connection)
            .await?)
    }

    pub async fn question_stats(&self, user_id: Option<i32>) -> Result<QuestionStatsRes, AppError> {
        let db = &self.database_connection;
        let total_questions = Question::find().count(db).await?;

        let mut by_difficulty = ByDifficulty::default();
        for tier in Difficulty::ALL {
            let count = Question::find()
                .filter(Column::Difficulty.eq(tier.as_str()))
                .count(db)
                .await?;
            by_difficulty.set(tier, count);
        }

        let mut stats = QuestionStatsRes {
            total_questions,
            by_difficulty,
            answered_by_user: None,
            remaining: None,
        };

        if let Some(uid) = user_id {
            let answered = AnsweredQuestion::find()
                .filter(AnsweredColumn::UserId.eq(uid))
                .count(db)
                .await?;
            stats.answered_by_user = Some(answered);
            stats.remaining = Some(total_questions as i64 - answered as i64);
        }

        Ok(stats)
    }

    /// Loads `bank` into an empty question table. Returns how many rows were
    /// inserted; a table that already has questions is left untouched.
    pub async fn seed_questions(&self, bank: Vec<QuestionSeed>) -> Result<u64, AppError> {
        if Question::find().count(&self.database_connection).await? > 0 {
            return Ok(0);
        }

        let txn = self.database_connection.begin().await?;
        let mut inserted = 0;
        for q in bank {
            QuestionActive {
                question_text: Set(q.question),
                option_a: Set(q.options.a),
                option_b: Set(q.options.b),
                option_c: Set(q.options.c),
                option_d: Set(q.options.d),
                correct_answer: Set(q.answer),
                difficulty: Set(q.difficulty),
                topic: Set(q.topic),
                explanation: Set(q.explanation),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            inserted += 1;
        }
        txn.commit().await?;

        info!("seeded {} questions", inserted);
        Ok(inserted)
    }
}
