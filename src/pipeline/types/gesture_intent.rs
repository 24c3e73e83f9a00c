use crate::pipeline::types::geometry::PixelPoint;

/// Display-only speed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeedIndicator {
    Accelerate,
    Brake,
}

impl SpeedIndicator {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accelerate => "ACCELERATE (W)",
            Self::Brake => "BRAKE (S)",
        }
    }
}

/// What a single frame's hand pose asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureIntent {
    Idle,
    /// Start gesture seen while in the menu.
    Start,
    Point {
        fingertip: PixelPoint,
        thumb_tip: PixelPoint,
    },
    Speed(SpeedIndicator),
}
