pub mod magic;
pub mod notation;
pub mod tables;
pub mod types;
