use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::core::{AppError, Result};
use crate::modules::notifications::models::Notification;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Newest first
    async fn list(&self) -> Result<Vec<Notification>>;

    async fn mark_read(&self, id: u32) -> Result<Notification>;
}

/// Start-up notifications, timestamped relative to `now`
pub fn seed_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    let notification = |id, kind: &str, title: &str, message: &str, age: Duration, unread| {
        Notification {
            id,
            kind: kind.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            timestamp: now - age,
            unread,
        }
    };

    vec![
        notification(
            1,
            "low-stock",
            "Low Stock Alert",
            "Parle-G Biscuits: Only 8 units left",
            Duration::minutes(2),
            true,
        ),
        notification(
            2,
            "high-demand",
            "High Demand Detected",
            "Maggi sales up 45% - consider restocking",
            Duration::hours(1),
            true,
        ),
        notification(
            3,
            "festival",
            "Festival Reminder",
            "Diwali in 15 days - prepare inventory",
            Duration::hours(3),
            false,
        ),
    ]
}

#[derive(Debug, Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn list(&self) -> Result<Vec<Notification>> {
        let mut notifications = self.notifications.read().await.clone();
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notifications)
    }

    async fn mark_read(&self, id: u32) -> Result<Notification> {
        let mut notifications = self.notifications.write().await;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| AppError::not_found(format!("Notification {} not found", id)))?;

        notification.unread = false;
        Ok(notification.clone())
    }
}
