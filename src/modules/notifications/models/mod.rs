mod notification;

pub use notification::{MarkReadRequest, MarkReadResponse, Notification};
