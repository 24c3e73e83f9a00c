use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionMode {
    #[default]
    Menu,
    Playing,
}

impl SessionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Playing => "playing",
        }
    }
}

/// Inputs that may move the session between modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The start gesture was held while a hand was in view.
    StartGesture,
    StartKey,
    MenuKey,
}

/// The discrete keyboard events the loop recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Quit,
    Start,
    Menu,
}

impl KeyEvent {
    pub fn trigger(&self) -> Option<Trigger> {
        match self {
            Self::Quit => None,
            Self::Start => Some(Trigger::StartKey),
            Self::Menu => Some(Trigger::MenuKey),
        }
    }
}
