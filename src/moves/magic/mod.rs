pub mod attacks;
pub mod precompute;
pub mod structs;
