pub mod body;
pub mod clock;
pub mod geometry;
pub mod outcome;
pub mod platform;
pub mod tuning;
pub mod world;
