pub mod availability;
pub mod day;
pub mod slot;
