//! GUI components

pub mod component_row;
pub mod history_strip;
pub mod sidebar;
pub mod status_badge;
pub mod summary_card;

// Re-export for convenience
pub use component_row::component_row;
pub use history_strip::history_strip;
pub use sidebar::sidebar;
pub use status_badge::{status_badge, status_color, status_dot};
pub use summary_card::{summary_card, SummaryCard, Trend};
