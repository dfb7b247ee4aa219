//! Component registry: the big data services DELoc manages

pub mod defaults;
pub mod models;
pub mod store;

pub use defaults::{default_components, DEFAULT_NETWORK};
pub use models::{Component, ComponentStatus, ComponentUpdate, NewComponent};
pub use store::ComponentRegistry;
