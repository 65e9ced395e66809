//! # notifications
//!
//! [`NotificationFeed`] — the toast list, newest first, capped at
//! [`FEED_CAPACITY`].  Eviction is by insertion order: when a push overflows
//! the feed the oldest entry drops off the back, whatever its kind.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::error::DashboardError;
use crate::models::Notification;

/// Maximum notifications kept on screen.
pub const FEED_CAPACITY: usize = 10;

#[derive(Debug, Clone)]
pub struct NotificationFeed {
    /// Newest at the front.
    items: VecDeque<Notification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(FEED_CAPACITY + 1),
        }
    }

    /// Put one notification on top.
    pub fn push(&mut self, notification: Notification) {
        self.items.push_front(notification);
        if self.items.len() > FEED_CAPACITY {
            self.items.pop_back();
        }
    }

    /// Put a batch on top, keeping the batch's own order (first item ends up
    /// newest).
    pub fn prepend_all(&mut self, batch: Vec<Notification>) {
        for notification in batch.into_iter().rev() {
            self.push(notification);
        }
    }

    pub fn dismiss(&mut self, id: Uuid) -> Result<Notification, DashboardError> {
        let idx = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or(DashboardError::NotificationNotFound(id))?;

        self.items
            .remove(idx)
            .ok_or(DashboardError::NotificationNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Clone out in display order for the renderer.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.items.iter().cloned().collect()
    }
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}
