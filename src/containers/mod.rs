//! Container drivers for the big data stack

pub mod docker;
pub mod logs;
pub mod models;
pub mod simulated;
pub mod traits;

pub use docker::DockerHttpService;
pub use logs::demux_log_stream;
pub use models::{ContainerInfo, ContainerStats};
pub use simulated::SimulatedContainerService;
pub use traits::{ContainerService, DEFAULT_LOG_TAIL};

use crate::registry::Component;
use crate::utils::{AppSettings, DelocError};
use std::sync::Arc;

/// Pick the driver the settings ask for
pub fn driver_for(
    settings: &AppSettings,
    components: &[Component],
) -> Result<Arc<dyn ContainerService>, DelocError> {
    match &settings.docker_host {
        Some(host) => Ok(Arc::new(DockerHttpService::new(host)?)),
        None => Ok(Arc::new(SimulatedContainerService::from_components(
            components,
        ))),
    }
}
