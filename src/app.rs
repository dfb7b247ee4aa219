//! Application initialization and main entry point
//!
//! [`run`] hands the window configuration to a [`HostRuntime`] exactly once and
//! turns the outcome into a process exit status. [`IcedHost`] is the real
//! runtime; tests substitute their own.

use crate::backend::spawn_backend;
use crate::database::{initialize_database, DatabaseManager};
use crate::gui::{icon, DelocApp, DelocFlags};
use crate::utils::{get_data_dir, get_database_path, AppSettings, DelocError};
use iced::{Application, Settings, Size};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{error, info};

pub const WINDOW_TITLE: &str = "DELoc";
pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_STARTUP_FAILURE: i32 = 1;

/// Window title and size limits, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowConfiguration {
    title: String,
    width: u32,
    height: u32,
    min_width: u32,
    min_height: u32,
}

impl WindowConfiguration {
    /// Sizes are in logical pixels. `min_* <= *` is expected but not checked here.
    pub fn new(
        title: impl Into<String>,
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    ) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            min_width,
            min_height,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// iced window settings for this configuration
    pub fn window_settings(&self) -> iced::window::Settings {
        iced::window::Settings {
            size: Size::new(self.width as f32, self.height as f32),
            min_size: Some(Size::new(self.min_width as f32, self.min_height as f32)),
            icon: icon::load_icon(),
            ..Default::default()
        }
    }
}

impl Default for WindowConfiguration {
    fn default() -> Self {
        Self::new(
            WINDOW_TITLE,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            MIN_WINDOW_WIDTH,
            MIN_WINDOW_HEIGHT,
        )
    }
}

/// Something that can open the DELoc window and block until it closes
pub trait HostRuntime {
    fn run_application(&self, config: WindowConfiguration) -> Result<(), DelocError>;
}

/// Start DELoc on `host` and return the process exit status
pub fn run<H: HostRuntime + ?Sized>(host: &H) -> i32 {
    let config = WindowConfiguration::default();
    info!(
        "Launching {} ({}x{})",
        config.title(),
        config.width(),
        config.height()
    );

    match host.run_application(config) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{}", e);
            EXIT_STARTUP_FAILURE
        }
    }
}

/// Command-line overrides applied on top of the stored settings
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub data_dir: Option<PathBuf>,
    pub docker_host: Option<String>,
    pub simulate: bool,
}

impl LaunchOptions {
    pub fn apply(&self, mut settings: AppSettings) -> AppSettings {
        if self.simulate {
            settings.docker_host = None;
        } else if let Some(host) = &self.docker_host {
            settings.docker_host = Some(host.clone());
        }
        settings.normalized()
    }
}

/// The production runtime: database, backend actor and the iced window
pub struct IcedHost {
    options: LaunchOptions,
}

impl IcedHost {
    pub fn new(options: LaunchOptions) -> Self {
        Self { options }
    }
}

impl HostRuntime for IcedHost {
    fn run_application(&self, config: WindowConfiguration) -> Result<(), DelocError> {
        // Long-lived runtime so backend tasks outlive this call's stack frame
        let runtime = Runtime::new().map_err(DelocError::startup)?;

        let data_dir = get_data_dir(self.options.data_dir.as_deref());
        let db_path = get_database_path(&data_dir);
        info!("Using database at {}", db_path.display());

        let (database, stored) = runtime.block_on(async {
            let pool = initialize_database(&db_path)
                .await
                .map_err(DelocError::startup)?;
            let database = DatabaseManager::new(pool);
            let stored = database
                .load_app_settings()
                .await
                .map_err(DelocError::startup)?;
            Ok::<_, DelocError>((database, stored))
        })?;

        let settings = self.options.apply(stored.unwrap_or_default());
        info!("Container driver: {}", settings.driver_label());

        let backend = runtime
            .block_on(spawn_backend(settings.clone(), Some(database)))
            .map_err(DelocError::startup)?;

        let window = config.window_settings();
        let flags = DelocFlags {
            title: config.title().to_string(),
            backend,
            runtime: Arc::new(runtime),
            settings,
        };

        DelocApp::run(Settings {
            window,
            antialiasing: true,
            ..Settings::with_flags(flags)
        })
        .map_err(DelocError::startup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_configuration_matches_constants() {
        let config = WindowConfiguration::default();
        assert_eq!(config.title(), "DELoc");
        assert_eq!(config.width(), 1024);
        assert_eq!(config.height(), 768);
        assert_eq!(config.min_width(), 800);
        assert_eq!(config.min_height(), 600);
        assert!(config.min_width() <= config.width());
        assert!(config.min_height() <= config.height());
    }

    #[test]
    fn window_settings_carry_sizes() {
        let settings = WindowConfiguration::default().window_settings();
        assert_eq!(settings.size, Size::new(1024.0, 768.0));
        assert_eq!(settings.min_size, Some(Size::new(800.0, 600.0)));
    }

    #[test]
    fn launch_options_override_stored_host() {
        let stored = AppSettings {
            docker_host: Some("http://stored:2375".to_string()),
            ..Default::default()
        };

        let simulate = LaunchOptions {
            simulate: true,
            docker_host: Some("http://cli:2375".to_string()),
            ..Default::default()
        };
        assert!(simulate.apply(stored.clone()).is_simulated());

        let cli = LaunchOptions {
            docker_host: Some("http://cli:2375".to_string()),
            ..Default::default()
        };
        assert_eq!(
            cli.apply(stored.clone()).docker_host.as_deref(),
            Some("http://cli:2375")
        );

        assert_eq!(LaunchOptions::default().apply(stored.clone()), stored);
    }
}
