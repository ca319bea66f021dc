use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::progress::{
    encode_new_chest_states, RProgressCreate, RProgressUpdate, DEFAULT_BRIGHTNESS, DEFAULT_ROOM,
    EMPTY_CHEST_STATES,
};
use chrono::{DateTime, Utc};
use entity::answered_question::{Column as AnsweredColumn, Entity as AnsweredQuestion};
use entity::game_progress::{
    ActiveModel as ProgressActive, Column, Entity as GameProgress, Model as ProgressModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use tracing::info;

/// Fresh-game row for `user_id`.
pub fn default_progress(user_id: i32, now: DateTime<Utc>) -> ProgressActive {
    ProgressActive {
        user_id: Set(user_id),
        current_room: Set(DEFAULT_ROOM),
        brightness_level: Set(DEFAULT_BRIGHTNESS),
        total_correct: Set(0),
        total_incorrect: Set(0),
        score: Set(0),
        game_completed: Set(false),
        chest_states: Set(EMPTY_CHEST_STATES.to_string()),
        last_saved: Set(now),
        ..Default::default()
    }
}

/// Drops the run and its answer history so every question is unseen again.
async fn wipe_run<C: ConnectionTrait>(conn: &C, user_id: i32) -> Result<(), AppError> {
    GameProgress::delete_many()
        .filter(Column::UserId.eq(user_id))
        .exec(conn)
        .await?;
    AnsweredQuestion::delete_many()
        .filter(AnsweredColumn::UserId.eq(user_id))
        .exec(conn)
        .await?;
    Ok(())
}

impl DatabaseService {
    pub async fn find_progress(&self, user_id: i32) -> Result<Option<ProgressModel>, AppError> {
        Ok(GameProgress::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.database_connection)
            .await?)
    }

    /// Current run, created with defaults on first access.
    pub async fn get_or_create_progress(&self, user_id: i32) -> Result<ProgressModel, AppError> {
        if let Some(progress) = self.find_progress(user_id).await? {
            return Ok(progress);
        }
        Ok(default_progress(user_id, Utc::now())
            .insert(&self.database_connection)
            .await?)
    }

    /// New game: old run and answered questions go, the body becomes the run.
    pub async fn start_new_progress(&self, user_id: i32, data: RProgressCreate) -> Result<ProgressModel, AppError> {
        let txn = self.database_connection.begin().await?;
        wipe_run(&txn, user_id).await?;

        let created = ProgressActive {
            user_id: Set(user_id),
            current_room: Set(data.current_room),
            brightness_level: Set(data.brightness_level),
            total_correct: Set(data.total_correct),
            total_incorrect: Set(data.total_incorrect),
            score: Set(data.score),
            game_completed: Set(data.game_completed),
            chest_states: Set(encode_new_chest_states(data.chest_states.as_ref())),
            last_saved: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!("user {} started a new game", user_id);
        Ok(created)
    }

    /// Upsert. Only the fields present in `patch` are written.
    pub async fn update_progress(&self, user_id: i32, patch: RProgressUpdate) -> Result<ProgressModel, AppError> {
        let now = Utc::now();
        let (mut model, exists): (ProgressActive, bool) = match self.find_progress(user_id).await? {
            Some(current) => (current.into(), true),
            None => (default_progress(user_id, now), false),
        };

        if let Some(v) = patch.current_room {
            model.current_room = Set(v);
        }
        if let Some(v) = patch.brightness_level {
            model.brightness_level = Set(v);
        }
        if let Some(v) = patch.total_correct {
            model.total_correct = Set(v);
        }
        if let Some(v) = patch.total_incorrect {
            model.total_incorrect = Set(v);
        }
        if let Some(v) = patch.score {
            model.score = Set(v);
        }
        if let Some(v) = patch.game_completed {
            model.game_completed = Set(v);
        }
        if let Some(v) = patch.chest_states {
            model.chest_states = Set(v.to_string());
        }
        model.last_saved = Set(now);

        let saved = if exists {
            model.update(&self.database_connection).await?
        } else {
            model.insert(&self.database_connection).await?
        };
        Ok(saved)
    }

    /// Reset. Safe to repeat.
    pub async fn delete_progress(&self, user_id: i32) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;
        wipe_run(&txn, user_id).await?;
        txn.commit().await?;
        info!("user {} reset their progress", user_id);
        Ok(())
    }
}
