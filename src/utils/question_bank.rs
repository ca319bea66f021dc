use std::fs;
use std::path::Path;

use crate::types::error::AppError;
use crate::types::question::{Difficulty, QuestionSeed};

const ANSWER_LETTERS: [&str; 4] = ["A", "B", "C", "D"];

pub fn load_question_bank(path: impl AsRef<Path>) -> Result<Vec<QuestionSeed>, AppError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Internal(format!("reading {}: {e}", path.display())))?;
    parse_question_bank(&raw)
}

/// Parses and checks a bank. Any bad entry rejects the whole file so a
/// typo never half-seeds the table.
pub fn parse_question_bank(raw: &str) -> Result<Vec<QuestionSeed>, AppError> {
    let bank: Vec<QuestionSeed> = serde_json::from_str(raw)
        .map_err(|e| AppError::Validation(format!("question bank is not valid JSON: {e}")))?;

    for (i, q) in bank.iter().enumerate() {
        q.difficulty
            .parse::<Difficulty>()
            .map_err(|e| AppError::Validation(format!("question #{}: {e}", i + 1)))?;
        if !ANSWER_LETTERS.contains(&q.answer.as_str()) {
            return Err(AppError::Validation(format!(
                "question #{}: answer '{}' is not one of A-D",
                i + 1,
                q.answer
            )));
        }
        if q.question.trim().is_empty() {
            return Err(AppError::Validation(format!("question #{}: empty text", i + 1)));
        }
    }

    Ok(bank)
}
