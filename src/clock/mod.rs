pub mod display;
pub mod face;
