//! Session-local notification feed and transient flash notices

use std::time::{Duration, Instant};

use serde::Serialize;
use shared::models::OrderItemStatus;
use shared::types::Timestamp;
use shared::util::now_millis;

/// Default lifetime of a flash notice
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_secs(3);

/// Kitchen-facing record of a dish status change. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub table_id: String,
    pub dish_id: String,
    pub dish_name: String,
    pub quantity: u32,
    pub status: OrderItemStatus,
    pub timestamp: Timestamp,
}

impl Notification {
    pub fn new(
        table_id: impl Into<String>,
        dish_id: impl Into<String>,
        dish_name: impl Into<String>,
        quantity: u32,
        status: OrderItemStatus,
    ) -> Self {
        Self {
            id: format!("notif-{}", uuid::Uuid::new_v4()),
            table_id: table_id.into(),
            dish_id: dish_id.into(),
            dish_name: dish_name.into(),
            quantity,
            status,
            timestamp: now_millis(),
        }
    }
}

/// Append-only feed
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    entries: Vec<Notification>,
}

impl NotificationFeed {
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(
            table_id = %notification.table_id,
            dish = %notification.dish_name,
            status = %notification.status,
            "Notification posted"
        );
        self.entries.push(notification);
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_table<'a>(&'a self, table_id: &'a str) -> impl Iterator<Item = &'a Notification> {
        self.entries.iter().filter(move |n| n.table_id == table_id)
    }
}

/// Success notice that dismisses itself after `ttl`
#[derive(Debug, Clone)]
pub struct Flash {
    pub message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Flash {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.ttl
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}
