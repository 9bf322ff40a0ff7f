pub mod race;
pub mod schedule;
