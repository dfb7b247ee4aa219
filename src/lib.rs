//! DELoc library: run and watch a local big data stack from the desktop

pub mod app;
pub mod backend;
pub mod containers;
pub mod database;
pub mod gui;
pub mod metrics;
pub mod notifications;
pub mod registry;
pub mod utils;

// Re-export main types for easier use
pub use app::{run, HostRuntime, IcedHost, LaunchOptions, WindowConfiguration};
pub use gui::{DelocApp, Message, View};
pub use registry::{Component, ComponentRegistry, ComponentStatus};
pub use utils::{AppSettings, DelocError};
