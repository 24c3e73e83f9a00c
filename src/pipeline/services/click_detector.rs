use crate::pipeline::types::PixelPoint;
use tracing::trace;

/// Pinch detection between the index fingertip and the thumb tip.
#[derive(Debug, Clone, Copy)]
pub struct ClickDetector {
    threshold: f64,
}

impl ClickDetector {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Returns where to draw the click marker when the tips are strictly
    /// closer than the threshold. Fires on every frame the pinch is held.
    pub fn detect(&self, index_tip: PixelPoint, thumb_tip: PixelPoint) -> Option<PixelPoint> {
        let distance = index_tip.distance(&thumb_tip);
        trace!("Pinch distance {:.1} (threshold {})", distance, self.threshold);
        (distance < self.threshold).then_some(index_tip)
    }
}

impl Default for ClickDetector {
    fn default() -> Self {
        Self::new(crate::config::CLICK_DIST)
    }
}
