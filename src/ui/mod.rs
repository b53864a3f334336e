// src/ui/mod.rs
// Declare the modules within the ui directory
pub mod calendar;
pub mod layout;
pub mod modals;
pub mod status_bar;
pub mod workout_list;

pub use layout::render_ui;
