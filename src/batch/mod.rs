pub mod driver;
pub mod pacing;
