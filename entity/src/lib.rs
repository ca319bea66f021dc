pub mod answered_question;
pub mod game_progress;
pub mod question;
pub mod user;

/*
 A user owns at most one game_progress row (the current run) and any number of
 answered_questions rows. Starting a new run or resetting progress wipes both so
 the question pool opens up again. Questions are static content seeded at start-up.
 */
