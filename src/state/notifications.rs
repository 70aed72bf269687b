use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::{Notification, NotificationKind};

/// Notifications kept, newest first.
pub const MAX_NOTIFICATIONS: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    /// Records a notification, evicting the oldest past the cap. Returns its id.
    pub fn push(
        &mut self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        now: DateTime<Utc>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.items.insert(
            0,
            Notification {
                id: id.clone(),
                title: title.to_string(),
                message: message.to_string(),
                kind,
                timestamp: now,
                read: false,
            },
        );
        self.items.truncate(MAX_NOTIFICATIONS);
        id
    }

    pub fn mark_read(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        self.items.iter_mut().for_each(|n| n.read = true);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
