pub mod check;
pub mod login;
pub mod profile;
pub mod register;
