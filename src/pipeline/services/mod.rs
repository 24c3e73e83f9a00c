pub mod annotation;
pub mod classifier;
pub mod click_detector;
pub mod cursor_mapper;
pub mod frame_effects;
pub mod gesture_interpreter;

pub use classifier::classify;
pub use click_detector::ClickDetector;
pub use cursor_mapper::{CursorMapper, CursorState, EdgePolicy};
pub use gesture_interpreter::interpret;
