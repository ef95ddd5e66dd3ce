// Voice assistant module (simulated command handling)

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{VoiceCommand, VoiceResponse};
pub use services::VoiceService;
