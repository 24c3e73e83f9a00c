use crate::common::frame::Frame;
use crate::pipeline::context::metrics::FrameMetrics;
use crate::pipeline::context::state::{
    CapturedState, DetectedState, InterpretedState, ProcessingState,
};
use crate::pipeline::types::{
    FingerExtension, GestureIntent, HandLandmarks, SessionMode, Size,
};
use std::time::{Duration, Instant};

// FrameContext with compile-time state tracking
pub struct FrameContext<S> {
    frame: Frame,
    metrics: FrameMetrics,
    processing_start: Instant,
    state: S,
}

impl<S: ProcessingState> FrameContext<S> {
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn size(&self) -> Size {
        Size::new(self.frame.width(), self.frame.height())
    }

    pub fn metrics(&self) -> &FrameMetrics {
        &self.metrics
    }

    pub fn elapsed(&self) -> Duration {
        self.processing_start.elapsed()
    }

    pub fn state_name(&self) -> &'static str {
        S::state_name()
    }
}

impl FrameContext<CapturedState> {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            metrics: FrameMetrics::new(),
            processing_start: Instant::now(),
            state: CapturedState,
        }
    }

    /// Swaps the pixels, e.g. after mirroring, before detection runs.
    pub fn map_image(self, f: impl FnOnce(&image::RgbImage) -> image::RgbImage) -> Self {
        let image = f(self.frame.image());
        Self {
            frame: self.frame.with_image(image),
            ..self
        }
    }

    pub fn into_detected(mut self, hand: Option<HandLandmarks>) -> FrameContext<DetectedState> {
        self.metrics.record_detection_duration(self.elapsed());
        FrameContext::<DetectedState> {
            frame: self.frame,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: DetectedState { hand },
        }
    }
}

impl FrameContext<DetectedState> {
    pub fn hand(&self) -> Option<&HandLandmarks> {
        self.state.hand.as_ref()
    }

    pub fn into_interpreted(
        self,
        fingers: Option<FingerExtension>,
        intent: GestureIntent,
        mode: SessionMode,
    ) -> FrameContext<InterpretedState> {
        FrameContext::<InterpretedState> {
            frame: self.frame,
            metrics: self.metrics,
            processing_start: self.processing_start,
            state: InterpretedState {
                hand: self.state.hand,
                fingers,
                intent,
                mode,
            },
        }
    }
}

impl FrameContext<InterpretedState> {
    pub fn hand(&self) -> Option<&HandLandmarks> {
        self.state.hand.as_ref()
    }

    pub fn fingers(&self) -> Option<FingerExtension> {
        self.state.fingers
    }

    pub fn intent(&self) -> GestureIntent {
        self.state.intent
    }

    /// Mode the frame was interpreted in.
    pub fn mode(&self) -> SessionMode {
        self.state.mode
    }

    pub fn finish(mut self) -> (Frame, Option<HandLandmarks>, FrameMetrics) {
        let total = self.elapsed();
        self.metrics.record_total_duration(total);
        (self.frame, self.state.hand, self.metrics)
    }
}
