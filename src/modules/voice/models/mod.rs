mod voice;

pub use voice::{VoiceAction, VoiceCommand, VoiceResponse};
