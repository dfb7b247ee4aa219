//! GUI views

pub mod component_view;
pub mod notifications_view;
pub mod overview;
pub mod settings_view;

// Re-export for convenience
pub use component_view::{component_view, LogState};
pub use notifications_view::notifications_view;
pub use overview::overview_view;
pub use settings_view::{settings_view, SettingsDraft};
