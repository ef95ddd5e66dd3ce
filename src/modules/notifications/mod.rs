// Notifications module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Notification;
pub use repositories::{InMemoryNotificationRepository, NotificationRepository};
pub use services::NotificationService;
