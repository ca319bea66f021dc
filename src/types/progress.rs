use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_ROOM: i32 = 1;
pub const DEFAULT_BRIGHTNESS: i32 = 100;
pub const EMPTY_CHEST_STATES: &str = "{}";

/// Body for starting a new run. Missing fields take the fresh-game defaults.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RProgressCreate {
    pub current_room: i32,
    pub brightness_level: i32,
    pub total_correct: i32,
    pub total_incorrect: i32,
    pub score: i32,
    pub game_completed: bool,
    pub chest_states: Option<Value>,
}

impl Default for RProgressCreate {
    fn default() -> Self {
        Self {
            current_room: DEFAULT_ROOM,
            brightness_level: DEFAULT_BRIGHTNESS,
            total_correct: 0,
            total_incorrect: 0,
            score: 0,
            game_completed: false,
            chest_states: Some(Value::Array(vec![])),
        }
    }
}

/// Partial update. `None` (absent or `null`) leaves the stored value alone.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RProgressUpdate {
    pub current_room: Option<i32>,
    pub brightness_level: Option<i32>,
    pub total_correct: Option<i32>,
    pub total_incorrect: Option<i32>,
    pub score: Option<i32>,
    pub game_completed: Option<bool>,
    pub chest_states: Option<Value>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProgressRes {
    pub id: i32,
    pub user_id: i32,
    pub current_room: i32,
    pub brightness_level: i32,
    pub total_correct: i32,
    pub total_incorrect: i32,
    pub score: i32,
    pub game_completed: bool,
    pub chest_states: String,
    pub last_saved: DateTime<Utc>,
}

impl From<entity::game_progress::Model> for ProgressRes {
    fn from(p: entity::game_progress::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            current_room: p.current_room,
            brightness_level: p.brightness_level,
            total_correct: p.total_correct,
            total_incorrect: p.total_incorrect,
            score: p.score,
            game_completed: p.game_completed,
            chest_states: p.chest_states,
            last_saved: p.last_saved,
        }
    }
}

/// One opened chest, as the client records it inside `chest_states`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChestState {
    pub room: i32,
    pub chest: i32,
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Chest states for a fresh run: empty values collapse to `"{}"`.
pub fn encode_new_chest_states(v: Option<&Value>) -> String {
    match v {
        Some(v) if is_truthy(v) => v.to_string(),
        _ => EMPTY_CHEST_STATES.to_string(),
    }
}
