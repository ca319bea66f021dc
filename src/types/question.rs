use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Question bucket, easiest first.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    VeryHard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
        Difficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::VeryHard => "very_hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Tier for a chest. Rooms 1-3 start at easy, 4-6 at medium, 7 and up
    /// at hard; each later chest in the room is one tier harder, capped at
    /// the third chest.
    pub fn for_room_chest(room: i32, chest: i32) -> Difficulty {
        let tiers = match room {
            i32::MIN..=3 => [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard],
            4..=6 => [Difficulty::Medium, Difficulty::Hard, Difficulty::VeryHard],
            _ => [Difficulty::Hard, Difficulty::VeryHard, Difficulty::Expert],
        };
        let slot = (chest.max(1) - 1).min(2) as usize;
        tiers[slot]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown difficulty '{s}'"))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RRandomQuestion {
    pub difficulty: String,
    pub exclude_ids: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct RRoomChestQuestion {
    #[validate(range(min = 1, message = "room must be at least 1"))]
    pub room: i32,
    #[validate(range(min = 1, message = "chest must be at least 1"))]
    pub chest: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RAnswerQuestion {
    pub question_id: i32,
    pub answered_correctly: bool,
    pub room_number: Option<i32>,
}

/// Comma separated ids from `exclude_ids`. One bad entry voids the whole
/// list rather than half-applying it.
pub fn parse_exclude_ids(raw: &str) -> Vec<i32> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<i32>)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_default()
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionRes {
    pub id: i32,
    pub question_text: String,
    pub option_a: String,
    pub option_b: String,
    pub option_c: String,
    pub option_d: String,
    pub correct_answer: String,
    pub difficulty: String,
    pub topic: String,
    pub explanation: Option<String>,
}

impl From<entity::question::Model> for QuestionRes {
    fn from(q: entity::question::Model) -> Self {
        Self {
            id: q.id,
            question_text: q.question_text,
            option_a: q.option_a,
            option_b: q.option_b,
            option_c: q.option_c,
            option_d: q.option_d,
            correct_answer: q.correct_answer,
            difficulty: q.difficulty,
            topic: q.topic,
            explanation: q.explanation,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnsweredRes {
    pub id: i32,
    pub question_id: i32,
    pub answered_correctly: bool,
    pub answered_at: DateTime<Utc>,
    pub room_number: Option<i32>,
}

impl From<entity::answered_question::Model> for AnsweredRes {
    fn from(a: entity::answered_question::Model) -> Self {
        Self {
            id: a.id,
            question_id: a.question_id,
            answered_correctly: a.answered_correctly,
            answered_at: a.answered_at,
            room_number: a.room_number,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ByDifficulty {
    pub easy: u64,
    pub medium: u64,
    pub hard: u64,
    pub very_hard: u64,
    pub expert: u64,
}

impl ByDifficulty {
    pub fn set(&mut self, difficulty: Difficulty, count: u64) {
        match difficulty {
            Difficulty::Easy => self.easy = count,
            Difficulty::Medium => self.medium = count,
            Difficulty::Hard => self.hard = count,
            Difficulty::VeryHard => self.very_hard = count,
            Difficulty::Expert => self.expert = count,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionStatsRes {
    pub total_questions: u64,
    pub by_difficulty: ByDifficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered_by_user: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<i64>,
}

/// One entry of a question bank file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuestionSeed {
    pub topic: String,
    pub difficulty: String,
    pub question: String,
    pub options: SeedOptions,
    pub answer: String,
    pub explanation: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SeedOptions {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}
