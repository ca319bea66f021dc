pub mod question_bank;
pub mod token;
pub mod webutils;
