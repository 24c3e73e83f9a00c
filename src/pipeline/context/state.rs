use crate::pipeline::types::{FingerExtension, GestureIntent, HandLandmarks, SessionMode};

// Markers to track the state of the frame processing pipeline
pub struct CapturedState;
pub struct DetectedState {
    pub(super) hand: Option<HandLandmarks>,
}
pub struct InterpretedState {
    pub(super) hand: Option<HandLandmarks>,
    pub(super) fingers: Option<FingerExtension>,
    pub(super) intent: GestureIntent,
    pub(super) mode: SessionMode,
}

pub trait ProcessingState: 'static {
    fn state_name() -> &'static str;
}

impl ProcessingState for CapturedState {
    fn state_name() -> &'static str {
        "Captured"
    }
}

impl ProcessingState for DetectedState {
    fn state_name() -> &'static str {
        "Detected"
    }
}

impl ProcessingState for InterpretedState {
    fn state_name() -> &'static str {
        "Interpreted"
    }
}
