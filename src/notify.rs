//! Notification banners with auto-dismiss.
//!
//! DESIGN
//! ======
//! Banners are stored in call order and the page renders them newest first.
//! Each push spawns one detached tokio task that removes that banner by id
//! after the dismiss delay. Removal is keyed by id, so a timer firing for an
//! already dismissed banner is a no-op and never touches another banner.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Banner severity; serialized as the alert class suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: Uuid,
    pub level: Level,
    pub message: String,
}

/// Shared banner stack. Cloning shares the same stack.
#[derive(Clone, Debug)]
pub struct Notifications {
    banners: Arc<RwLock<Vec<Notification>>>,
    dismiss_after: Duration,
}

impl Notifications {
    #[must_use]
    pub fn new(dismiss_after: Duration) -> Self {
        Self { banners: Arc::new(RwLock::new(Vec::new())), dismiss_after }
    }

    /// Show a banner and schedule its removal.
    pub async fn push(&self, level: Level, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        let message = message.into();
        tracing::debug!(%id, ?level, %message, "notification shown");
        self.banners.write().await.push(Notification { id, level, message });

        let banners = Arc::clone(&self.banners);
        let delay = self.dismiss_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            remove(&banners, id).await;
        });

        id
    }

    /// User dismissal. Returns whether the banner was still showing.
    pub async fn dismiss(&self, id: Uuid) -> bool {
        remove(&self.banners, id).await
    }

    /// Visible banners, oldest first.
    pub async fn list(&self) -> Vec<Notification> {
        self.banners.read().await.clone()
    }
}

async fn remove(banners: &RwLock<Vec<Notification>>, id: Uuid) -> bool {
    let mut banners = banners.write().await;
    let before = banners.len();
    banners.retain(|banner| banner.id != id);
    banners.len() != before
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
