use crate::pipeline::types::geometry::PixelPoint;
use crate::pipeline::types::landmark::HandLandmarks;

pub type Color = [u8; 3];

pub const WHITE: Color = [255, 255, 255];
pub const YELLOW: Color = [255, 255, 0];
pub const GREY: Color = [200, 200, 200];
pub const SALMON: Color = [255, 100, 100];
pub const MAGENTA: Color = [255, 0, 255];
pub const GREEN: Color = [0, 255, 0];
pub const RED: Color = [255, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Horizontally centered on the frame, baseline at `y`.
    CenteredAt { y: i32 },
    /// Left edge at `x`, baseline at `y`.
    At { x: i32, y: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayText {
    pub text: String,
    pub anchor: TextAnchor,
    pub size: f32,
    pub color: Color,
}

impl OverlayText {
    pub fn new(text: impl Into<String>, anchor: TextAnchor, size: f32, color: Color) -> Self {
        Self {
            text: text.into(),
            anchor,
            size,
            color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideRect {
    pub top_left: PixelPoint,
    pub bottom_right: PixelPoint,
}

/// Everything the display draws on top of a frame, in frame pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub texts: Vec<OverlayText>,
    pub guide: Option<GuideRect>,
    pub skeleton: Option<HandLandmarks>,
    pub click_marker: Option<PixelPoint>,
}

impl Overlay {
    pub fn push_text(&mut self, text: OverlayText) {
        self.texts.push(text);
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text == needle)
    }
}
