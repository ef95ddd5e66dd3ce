pub mod voice_service;

pub use voice_service::VoiceService;
