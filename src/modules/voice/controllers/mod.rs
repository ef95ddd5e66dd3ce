pub mod voice_controller;

pub use voice_controller::configure;
