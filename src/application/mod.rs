pub mod input;
pub mod wiring;
