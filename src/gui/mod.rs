//! GUI module

pub mod app;
pub mod clipboard;
pub mod components;
pub mod icon;
pub mod theme;
pub mod views;

// Re-export for convenience
pub use app::{DelocApp, DelocFlags, Message, View};
