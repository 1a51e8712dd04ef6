pub mod checkin;
pub mod config;
pub mod memory;
pub mod mission;
pub mod profile;
pub mod quest;
pub mod task;
