pub mod notification_repository;

pub use notification_repository::{
    seed_notifications, InMemoryNotificationRepository, NotificationRepository,
};
