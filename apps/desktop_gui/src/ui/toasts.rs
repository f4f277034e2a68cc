//! Auto-dismiss bookkeeping for notification toasts.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use client_core::notify::Notifications;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Default)]
pub struct ToastClock {
    first_shown: HashMap<u64, Instant>,
}

impl ToastClock {
    /// Records newly visible toasts and returns the ids that have outlived [`TOAST_LIFETIME`].
    pub fn expired(&mut self, notifications: &Notifications, now: Instant) -> Vec<u64> {
        self.first_shown
            .retain(|id, _| notifications.iter().any(|n| n.id == *id));
        let mut expired = Vec::new();
        for notification in notifications.iter() {
            let shown = *self.first_shown.entry(notification.id).or_insert(now);
            if now.saturating_duration_since(shown) >= TOAST_LIFETIME {
                expired.push(notification.id);
            }
        }
        expired
    }
}
