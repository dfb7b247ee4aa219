//! Backend actor and the handle the GUI uses to reach it

pub mod actor;
pub mod messages;

pub use actor::BackendActor;
pub use messages::{BackendCommand, BackendEvent};

use crate::database::DatabaseManager;
use crate::utils::{AppSettings, DelocError};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::warn;

const CHANNEL_CAPACITY: usize = 100;

/// Cloneable GUI-side end of the backend channels
#[derive(Debug, Clone)]
pub struct BackendHandle {
    commands: mpsc::Sender<BackendCommand>,
    events: Arc<Mutex<mpsc::Receiver<BackendEvent>>>,
}

impl BackendHandle {
    /// Create a handle together with the actor-side channel ends
    pub fn channel() -> (
        Self,
        mpsc::Receiver<BackendCommand>,
        mpsc::Sender<BackendEvent>,
    ) {
        let (command_tx, command_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let handle = Self {
            commands: command_tx,
            events: Arc::new(Mutex::new(event_rx)),
        };
        (handle, command_rx, event_tx)
    }

    /// Queue a command without waiting
    pub fn send(&self, command: BackendCommand) -> Result<(), DelocError> {
        self.commands
            .try_send(command)
            .map_err(|e| DelocError::Container(format!("Backend unavailable: {}", e)))
    }

    /// Take every event that is ready right now
    pub fn drain_events(&self) -> Vec<BackendEvent> {
        let mut events = Vec::new();
        match self.events.lock() {
            Ok(mut receiver) => {
                while let Ok(event) = receiver.try_recv() {
                    events.push(event);
                }
            }
            Err(e) => warn!("Backend event receiver poisoned: {}", e),
        }
        events
    }
}

/// Build the actor and spawn it on the current tokio runtime
pub async fn spawn_backend(
    settings: AppSettings,
    database: Option<DatabaseManager>,
) -> Result<BackendHandle, DelocError> {
    let (handle, commands, events) = BackendHandle::channel();
    let actor = BackendActor::new(settings, database, commands, events).await?;
    tokio::spawn(actor.run());
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_reach_the_actor_side() {
        let (handle, mut commands, _events) = BackendHandle::channel();
        handle.send(BackendCommand::Restart(3)).unwrap();
        handle.send(BackendCommand::Shutdown).unwrap();

        tokio_test::block_on(async {
            assert_eq!(commands.recv().await, Some(BackendCommand::Restart(3)));
            assert_eq!(commands.recv().await, Some(BackendCommand::Shutdown));
        });
    }

    #[test]
    fn drain_returns_ready_events_in_order() {
        let (handle, _commands, events) = BackendHandle::channel();
        assert!(handle.drain_events().is_empty());

        tokio_test::block_on(async {
            events.send(BackendEvent::Error("first".into())).await.unwrap();
            events.send(BackendEvent::Error("second".into())).await.unwrap();
        });

        let drained = handle.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(matches!(&drained[0], BackendEvent::Error(m) if m == "first"));
        assert!(handle.drain_events().is_empty());
    }

    #[test]
    fn send_fails_once_the_actor_is_gone() {
        let (handle, commands, _events) = BackendHandle::channel();
        drop(commands);
        let err = handle.send(BackendCommand::Refresh).unwrap_err();
        assert!(err.to_string().contains("Backend unavailable"));
    }
}
