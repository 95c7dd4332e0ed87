//! Configuration management for the audiobook carousel
//!
//! A single JSON settings file holds window, layout, gesture and edit-mode
//! tunables. See [`settings`] for the file layout.

pub mod settings;

pub use settings::{EditSettings, LayoutSettings, Settings};
