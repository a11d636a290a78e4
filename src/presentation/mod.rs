pub mod display;
pub mod opener;
pub mod terminal;
pub mod view_model;
