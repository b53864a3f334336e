// src/app/mod.rs
use thiserror::Error;

// Declare the modules within the app directory
pub mod actions;
pub mod data;
pub mod input;
pub mod modals;
pub mod navigation;
pub mod state;

// Re-export the main App struct and other necessary types for convenience
pub use state::{ActiveModal, App, PaneFocus};

// Define App-specific errors here
#[derive(Error, Debug, Clone)]
pub enum AppInputError {
    #[error("Select a date in the calendar first.")]
    NoDateSelected,
    #[error("Preset text cannot be empty.")]
    InputEmpty,
    #[error("{0}")] // Generic way to show store errors in modals
    Store(String),
}
