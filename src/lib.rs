pub mod app;
pub mod common;
pub mod config;
pub mod devices;
pub mod error;
pub mod pipeline;

pub use config::Settings;
pub use error::{AppError, CaptureError, DetectorError, PointerError, SettingsError};
pub use pipeline::{GestureController, SessionMode, Tick};
