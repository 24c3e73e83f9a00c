mod fingers;
mod geometry;
mod gesture_intent;
mod landmark;
mod overlay;
mod session_mode;

pub use fingers::{Digit, FingerExtension};
pub use geometry::{PixelPoint, ScreenPoint, Size};
pub use gesture_intent::{GestureIntent, SpeedIndicator};
pub use landmark::{HAND_CONNECTIONS, HandLandmarks, LANDMARK_COUNT, Landmark, landmarks};
pub use overlay::{Color, GuideRect, Overlay, OverlayText, TextAnchor};
pub use session_mode::{KeyEvent, SessionMode, Trigger};

pub mod colors {
    pub use super::overlay::{GREEN, GREY, MAGENTA, RED, SALMON, WHITE, YELLOW};
}
