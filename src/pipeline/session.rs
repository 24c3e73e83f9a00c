use crate::pipeline::types::{SessionMode, Trigger};
use tracing::{info, trace};
use uuid::Uuid;

impl SessionMode {
    /// Pure transition function.
    ///
    /// The menu is left by the start gesture or the start key; play mode is
    /// only left through the menu key. Everything else keeps the mode.
    pub fn next(self, trigger: Trigger) -> SessionMode {
        match (self, trigger) {
            (SessionMode::Menu, Trigger::StartGesture | Trigger::StartKey) => SessionMode::Playing,
            (SessionMode::Playing, Trigger::MenuKey) => SessionMode::Menu,
            (mode, _) => mode,
        }
    }
}

/// Owns the active mode for one run of the controller.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    mode: SessionMode,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            mode: SessionMode::Menu,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Applies `trigger`, returning the new mode if it changed.
    pub fn apply(&mut self, trigger: Trigger) -> Option<SessionMode> {
        let next = self.mode.next(trigger);
        if next == self.mode {
            trace!("Session {}: {:?} ignored in {:?}", self.id, trigger, self.mode);
            return None;
        }
        info!(
            "Session {}: {} -> {} ({:?})",
            self.id,
            self.mode.as_str(),
            next.as_str(),
            trigger
        );
        self.mode = next;
        Some(next)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
