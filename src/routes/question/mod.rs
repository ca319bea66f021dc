pub mod answered;
pub mod random;
pub mod room_chest;
pub mod stats;
