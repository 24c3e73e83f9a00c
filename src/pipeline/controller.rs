use crate::common::Frame;
use crate::config::Settings;
use crate::devices::{FrameSource, HandDetector, PointerSink};
use crate::error::AppError;
use crate::pipeline::context::{FrameContext, FrameMetrics};
use crate::pipeline::services::{
    ClickDetector, CursorMapper, CursorState, annotation, classify, frame_effects, interpret,
};
use crate::pipeline::session::Session;
use crate::pipeline::types::{
    GestureIntent, KeyEvent, Overlay, PixelPoint, SessionMode, Size, Trigger,
};
use tracing::{debug, error, info, trace, warn};
use uuid::Uuid;

/// One processed frame, ready for the display.
pub struct RenderedFrame {
    pub frame: Frame,
    pub overlay: Overlay,
    pub mode: SessionMode,
    pub metrics: FrameMetrics,
}

pub enum Tick {
    Rendered(RenderedFrame),
    /// Quit was requested or the capture stream ended; the camera is released.
    Finished,
}

/// Drives the per-frame loop: capture, detect, interpret, act, annotate.
pub struct GestureController {
    source: Option<Box<dyn FrameSource>>,
    detector: Box<dyn HandDetector>,
    pointer: Box<dyn PointerSink>,
    session: Session,
    mapper: CursorMapper,
    clicker: ClickDetector,
    cursor: CursorState,
    screen: Size,
    mirror: bool,
}

impl GestureController {
    /// Queries the screen size once; it is fixed for the rest of the run.
    pub fn new(
        settings: &Settings,
        source: Box<dyn FrameSource>,
        detector: Box<dyn HandDetector>,
        pointer: Box<dyn PointerSink>,
    ) -> Result<Self, AppError> {
        let screen = pointer.screen_size()?;
        let session = Session::new();
        info!(
            "Session {} started, screen {}x{}",
            session.id(),
            screen.width,
            screen.height
        );
        Ok(Self {
            source: Some(source),
            detector,
            pointer,
            session,
            mapper: CursorMapper::from_settings(&settings.control),
            clicker: ClickDetector::new(settings.control.click_distance),
            cursor: CursorState::default(),
            screen,
            mirror: settings.capture.mirror,
        })
    }

    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }

    pub fn mode(&self) -> SessionMode {
        self.session.mode()
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.source.is_none()
    }

    /// Runs one loop iteration with the key event polled for this frame.
    ///
    /// A capture or detector failure is returned once; every later call
    /// reports [`Tick::Finished`].
    pub fn tick(&mut self, key: Option<KeyEvent>) -> Result<Tick, AppError> {
        let Some(source) = self.source.as_mut() else {
            return Ok(Tick::Finished);
        };

        let frame = match source.read() {
            Ok(Some(frame)) => frame,
            Ok(None) => {
                info!("Capture stream ended");
                self.release();
                return Ok(Tick::Finished);
            }
            Err(e) => {
                error!("Capture failed: {}", e);
                self.release();
                return Err(e.into());
            }
        };

        let rendered = match self.process(frame) {
            Ok(rendered) => rendered,
            Err(e) => {
                error!("Frame processing failed: {}", e);
                self.release();
                return Err(e);
            }
        };

        match key {
            Some(KeyEvent::Quit) => {
                info!("Quit requested");
                self.release();
                return Ok(Tick::Finished);
            }
            Some(key) => {
                if let Some(trigger) = key.trigger() {
                    self.session.apply(trigger);
                }
            }
            None => {}
        }

        Ok(Tick::Rendered(rendered))
    }

    /// Processes one frame in the current mode.
    pub fn process(&mut self, frame: Frame) -> Result<RenderedFrame, AppError> {
        let mut ctx = FrameContext::new(frame);
        if self.mirror {
            ctx = ctx.map_image(frame_effects::mirror);
        }

        let hand = self.detector.detect(ctx.frame())?;
        let ctx = ctx.into_detected(hand);

        let mode = self.session.mode();
        let fingers = ctx.hand().map(classify);
        let intent = match (ctx.hand(), fingers) {
            (Some(hand), Some(fingers)) => interpret(mode, fingers, hand),
            _ => GestureIntent::Idle,
        };
        let ctx = ctx.into_interpreted(fingers, intent, mode);
        trace!(
            "Frame {} [{}]: fingers={:?} intent={:?}",
            ctx.frame().frame_id(),
            ctx.mode().as_str(),
            ctx.fingers(),
            ctx.intent()
        );

        let overlay = match mode {
            SessionMode::Menu => {
                if intent == GestureIntent::Start {
                    self.session.apply(Trigger::StartGesture);
                }
                annotation::menu_overlay()
            }
            SessionMode::Playing => {
                let click_marker = self.act(intent, ctx.size());
                let indicator = match intent {
                    GestureIntent::Speed(indicator) => Some(indicator),
                    _ => None,
                };
                annotation::playing_overlay(
                    self.mapper.inset(ctx.size()),
                    ctx.hand(),
                    indicator,
                    click_marker,
                )
            }
        };

        let (frame, _, metrics) = ctx.finish();
        let frame = match mode {
            SessionMode::Menu => frame.with_image(frame_effects::menu_backdrop(frame.image())),
            SessionMode::Playing => frame,
        };
        trace!(
            "Frame {} processed in {:?} (detection {:?})",
            frame.frame_id(),
            metrics.total_duration(),
            metrics.detection_duration()
        );

        Ok(RenderedFrame {
            frame,
            overlay,
            mode,
            metrics,
        })
    }

    /// Cursor and click handling for a pointing hand. Returns the click marker.
    fn act(&mut self, intent: GestureIntent, frame: Size) -> Option<PixelPoint> {
        let GestureIntent::Point {
            fingertip,
            thumb_tip,
        } = intent
        else {
            return None;
        };

        let (target, state) = self
            .mapper
            .map_and_smooth(fingertip, frame, self.screen, self.cursor);
        let (x, y) = target.rounded();
        if let Err(e) = self.pointer.move_to(x, y) {
            warn!("Pointer move failed: {}", e);
        }
        self.cursor = state;

        let marker = self.clicker.detect(fingertip, thumb_tip);
        if marker.is_some() {
            debug!("Pinch click at {:?}", fingertip);
            if let Err(e) = self.pointer.click() {
                warn!("Pointer click failed: {}", e);
            }
        }
        marker
    }

    fn release(&mut self) {
        if self.source.take().is_some() {
            info!("Session {} stopped", self.session.id());
        }
    }
}
