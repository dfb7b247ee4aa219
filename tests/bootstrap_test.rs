//! Bootstrap behaviour driven through a fake host runtime.

use deloc::app::{self, HostRuntime, WindowConfiguration, EXIT_SUCCESS};
use deloc::DelocError;
use std::cell::{Cell, RefCell};
use std::io;
use std::sync::{Arc, Mutex};

struct FakeHost {
    calls: Cell<u32>,
    received: RefCell<Option<WindowConfiguration>>,
    failure: Option<&'static str>,
}

impl FakeHost {
    fn new(failure: Option<&'static str>) -> Self {
        Self {
            calls: Cell::new(0),
            received: RefCell::new(None),
            failure,
        }
    }
}

impl HostRuntime for FakeHost {
    fn run_application(&self, config: WindowConfiguration) -> Result<(), DelocError> {
        self.calls.set(self.calls.get() + 1);
        *self.received.borrow_mut() = Some(config);
        match self.failure {
            Some(message) => Err(DelocError::startup(message)),
            None => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `host` with a subscriber that writes into a buffer
fn run_capturing(host: &FakeHost) -> (i32, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let status = tracing::subscriber::with_default(subscriber, || app::run(host));
    (status, logs.contents())
}

#[test]
fn success_exits_zero_without_error_output() {
    let host = FakeHost::new(None);
    let (status, logs) = run_capturing(&host);

    assert_eq!(status, EXIT_SUCCESS);
    assert_eq!(status, 0);
    assert!(!logs.contains("ERROR"), "unexpected error output: {}", logs);
}

#[test]
fn failure_reports_message_and_exits_non_zero() {
    let host = FakeHost::new(Some("boom"));
    let (status, logs) = run_capturing(&host);

    assert_ne!(status, 0);
    assert!(logs.contains("boom"), "missing failure text: {}", logs);
    assert!(logs.contains("ERROR"));
}

#[test]
fn host_is_called_exactly_once() {
    for failure in [None, Some("boom")] {
        let host = FakeHost::new(failure);
        let _ = run_capturing(&host);
        assert_eq!(host.calls.get(), 1);
    }
}

#[test]
fn host_receives_shipped_configuration() {
    let host = FakeHost::new(None);
    let _ = run_capturing(&host);

    let config = host.received.borrow().clone().unwrap();
    assert_eq!(config, WindowConfiguration::new("DELoc", 1024, 768, 800, 600));
    assert!(config.min_width() <= config.width());
    assert!(config.min_height() <= config.height());
}
