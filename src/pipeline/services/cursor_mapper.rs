use crate::config::ControlSettings;
use crate::pipeline::types::{GuideRect, PixelPoint, ScreenPoint, Size};

/// How fingertip positions outside the inset rectangle are mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Pin to the inset edge, so the cursor stops at the screen border.
    Clamp,
    /// Continue the linear map past the inset, possibly off-screen.
    Extrapolate,
}

/// Smoothed cursor position carried from one pointing frame to the next.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub previous: ScreenPoint,
    pub current: ScreenPoint,
}

/// Maps a fingertip inside the inset rectangle to an absolute screen position
/// and low-pass filters it.
#[derive(Debug, Clone)]
pub struct CursorMapper {
    frame_reduction: u32,
    smoothing: f64,
    edge_policy: EdgePolicy,
}

impl CursorMapper {
    pub fn new(frame_reduction: u32, smoothing: f64) -> Self {
        Self {
            frame_reduction,
            smoothing,
            edge_policy: EdgePolicy::Clamp,
        }
    }

    pub fn from_settings(settings: &ControlSettings) -> Self {
        let policy = if settings.clamp_to_inset {
            EdgePolicy::Clamp
        } else {
            EdgePolicy::Extrapolate
        };
        Self::new(settings.frame_reduction, settings.smoothing).with_edge_policy(policy)
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    /// The source rectangle, also drawn as the on-screen guide.
    pub fn inset(&self, frame: Size) -> GuideRect {
        let r = self.frame_reduction as i32;
        GuideRect {
            top_left: PixelPoint::new(r, r),
            bottom_right: PixelPoint::new(frame.width as i32 - r, frame.height as i32 - r),
        }
    }

    /// Unsmoothed screen position for `point`.
    pub fn target(&self, point: PixelPoint, frame: Size, screen: Size) -> ScreenPoint {
        let inset = self.inset(frame);
        ScreenPoint::new(
            self.interpolate(
                f64::from(point.x),
                f64::from(inset.top_left.x),
                f64::from(inset.bottom_right.x),
                f64::from(screen.width),
            ),
            self.interpolate(
                f64::from(point.y),
                f64::from(inset.top_left.y),
                f64::from(inset.bottom_right.y),
                f64::from(screen.height),
            ),
        )
    }

    /// `current = previous + (target - previous) / smoothing`
    pub fn map_and_smooth(
        &self,
        point: PixelPoint,
        frame: Size,
        screen: Size,
        prior: CursorState,
    ) -> (ScreenPoint, CursorState) {
        let target = self.target(point, frame, screen);
        let previous = prior.current;
        let current = ScreenPoint::new(
            previous.x + (target.x - previous.x) / self.smoothing,
            previous.y + (target.y - previous.y) / self.smoothing,
        );
        (current, CursorState { previous, current })
    }

    fn interpolate(&self, value: f64, low: f64, high: f64, span: f64) -> f64 {
        let value = match self.edge_policy {
            EdgePolicy::Clamp => value.clamp(low, high),
            EdgePolicy::Extrapolate => value,
        };
        (value - low) / (high - low) * span
    }
}

impl Default for CursorMapper {
    fn default() -> Self {
        Self::from_settings(&ControlSettings::default())
    }
}
