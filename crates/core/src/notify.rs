//! Transient notification banners.
//!
//! A banner lives until its deadline passes or it is dismissed, whichever comes first. The
//! server drops due banners with [`NotificationCenter::expire`] before rendering; the rendered
//! banner carries the centre's delay so the page hides it on the same schedule.

use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// Bootstrap alert class suffix. Bootstrap has no `alert-error`, so errors use `danger`.
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Owns the banners currently on screen.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    delay: Duration,
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            items: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Insert a banner that expires `delay` from now and return its id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            expires_at: Instant::now() + self.delay,
        };
        let id = notification.id;
        tracing::debug!("notification {} ({:?}) shown", id, severity);
        self.items.push(notification);
        id
    }

    /// Remove a banner by hand. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    /// Drop every banner whose deadline has passed and return how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        before - self.items.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.items.iter().filter(|n| n.severity == severity).count()
    }
}
