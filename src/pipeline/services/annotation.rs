use crate::pipeline::types::colors::{GREEN, GREY, MAGENTA, RED, SALMON, WHITE, YELLOW};
use crate::pipeline::types::{
    GuideRect, HandLandmarks, Overlay, OverlayText, PixelPoint, SpeedIndicator, TextAnchor,
};

pub const MODE_HEADER: &str = "Mode: PLAY (press 'M' for menu)";

const MENU_LINES: [(&str, i32, f32, [u8; 3]); 4] = [
    ("GESTURE CONTROL", 150, 1.5, YELLOW),
    ("Gesture: peace sign (V) to start", 250, 0.7, WHITE),
    ("Or press [SPACE]", 290, 0.6, GREY),
    ("[Q] to quit", 450, 0.6, SALMON),
];

/// Instruction text shown over the menu backdrop.
pub fn menu_overlay() -> Overlay {
    let mut overlay = Overlay::default();
    for (text, y, size, color) in MENU_LINES {
        overlay.push_text(OverlayText::new(
            text,
            TextAnchor::CenteredAt { y },
            size,
            color,
        ));
    }
    overlay
}

/// Guide rectangle, header and whatever the current hand pose produced.
pub fn playing_overlay(
    guide: GuideRect,
    hand: Option<&HandLandmarks>,
    indicator: Option<SpeedIndicator>,
    click_marker: Option<PixelPoint>,
) -> Overlay {
    let mut overlay = Overlay {
        guide: Some(guide),
        skeleton: hand.cloned(),
        click_marker,
        ..Overlay::default()
    };
    overlay.push_text(OverlayText::new(
        MODE_HEADER,
        TextAnchor::At { x: 10, y: 30 },
        1.0,
        MAGENTA,
    ));
    if let Some(indicator) = indicator {
        let color = match indicator {
            SpeedIndicator::Accelerate => GREEN,
            SpeedIndicator::Brake => RED,
        };
        overlay.push_text(OverlayText::new(
            indicator.label(),
            TextAnchor::At { x: 50, y: 400 },
            3.0,
            color,
        ));
    }
    overlay
}
