pub mod context;
pub mod controller;
pub mod services;
pub mod session;
pub mod types;

pub use controller::{GestureController, RenderedFrame, Tick};
pub use session::Session;
pub use types::{FingerExtension, GestureIntent, HandLandmarks, KeyEvent, SessionMode};
