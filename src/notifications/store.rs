//! Newest-first notification store

use super::models::{NewNotification, Notification, NotificationFilter};
use chrono::Utc;

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    notifications: Vec<Notification>,
    next_id: u64,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted notifications (any order)
    pub fn from_existing(mut notifications: Vec<Notification>) -> Self {
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        let next_id = notifications.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self {
            notifications,
            next_id,
        }
    }

    /// Never hand out an id at or below `id`
    pub fn reserve_ids_through(&mut self, id: u64) {
        self.next_id = self.next_id.max(id.saturating_add(1));
    }

    /// Stamp and insert at the front
    pub fn add(&mut self, new: NewNotification) -> Notification {
        let id = self.next_id.max(1);
        self.next_id = id + 1;

        let notification = Notification {
            id,
            title: new.title,
            message: new.message,
            kind: new.kind,
            timestamp: Utc::now(),
            is_read: false,
            source: new.source,
        };
        self.notifications.insert(0, notification.clone());
        notification
    }

    pub fn mark_read(&mut self, id: u64) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn filtered(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.notifications
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationKind;

    fn note(kind: NotificationKind, title: &str) -> NewNotification {
        NewNotification::new(kind, title, "message", "System")
    }

    #[test]
    fn add_puts_newest_first_and_unread() {
        let mut store = NotificationStore::new();
        store.add(note(NotificationKind::Info, "first"));
        let second = store.add(note(NotificationKind::Warning, "second"));

        assert_eq!(store.all()[0].title, "second");
        assert_eq!(second.id, 2);
        assert!(!second.is_read);
        assert_eq!(store.unread_count(), 2);
    }

    #[test]
    fn reserved_ids_are_never_reused() {
        let mut store = NotificationStore::new();
        store.reserve_ids_through(7);
        assert_eq!(store.add(note(NotificationKind::Info, "a")).id, 8);

        // A lower floor never moves the counter back
        store.reserve_ids_through(2);
        assert_eq!(store.add(note(NotificationKind::Info, "b")).id, 9);
    }

    #[test]
    fn mark_read_delete_and_mark_all() {
        let mut store = NotificationStore::new();
        let a = store.add(note(NotificationKind::Info, "a"));
        let b = store.add(note(NotificationKind::Error, "b"));
        store.add(note(NotificationKind::Success, "c"));

        assert!(store.mark_read(a.id));
        assert!(!store.mark_read(99));
        assert_eq!(store.unread_count(), 2);

        assert!(store.delete(b.id));
        assert!(!store.delete(b.id));
        assert_eq!(store.all().len(), 2);

        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);
    }

    #[test]
    fn filters_by_read_state_and_kind() {
        let mut store = NotificationStore::new();
        let a = store.add(note(NotificationKind::Warning, "a"));
        store.add(note(NotificationKind::Warning, "b"));
        store.add(note(NotificationKind::Error, "c"));
        store.mark_read(a.id);

        assert_eq!(store.filtered(NotificationFilter::All).len(), 3);
        assert_eq!(store.filtered(NotificationFilter::Unread).len(), 2);
        let warnings = store.filtered(NotificationFilter::Kind(NotificationKind::Warning));
        assert_eq!(
            warnings.iter().map(|n| n.title.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn from_existing_continues_ids() {
        let mut store = NotificationStore::new();
        store.add(note(NotificationKind::Info, "a"));
        store.add(note(NotificationKind::Info, "b"));
        let persisted = store.all().to_vec();

        let mut restored = NotificationStore::from_existing(persisted);
        let next = restored.add(note(NotificationKind::Info, "c"));
        assert_eq!(next.id, 3);
        assert_eq!(restored.all()[0].title, "c");
    }
}
