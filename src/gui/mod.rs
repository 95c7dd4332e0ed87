//! egui front end: carousel window and the edit-mode overlay

mod app;
mod components;
pub mod constants;

pub use app::run_gui;
