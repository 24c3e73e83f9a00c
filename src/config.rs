use crate::error::SettingsError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub const SMOOTHING: f64 = 5.0;
pub const CLICK_DIST: f64 = 30.0;
pub const FRAME_REDUCTION: u32 = 100;
pub const CAM_WIDTH: u32 = 640;
pub const CAM_HEIGHT: u32 = 480;

const CONFIG_PATH_VAR: &str = "HANDPILOT_CONFIG";
const DEFAULT_CONFIG_NAME: &str = "handpilot";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub capture: CaptureSettings,
    pub detector: DetectorSettings,
    pub control: ControlSettings,
    pub pointer: PointerSettings,
    pub window: WindowSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub ffmpeg_path: String,
    /// ffmpeg demuxer used to open the camera (`v4l2`, `avfoundation`, `dshow`).
    pub input_format: String,
    pub device: String,
    pub width: u32,
    pub height: u32,
    /// Flip frames horizontally so the feed behaves like a mirror.
    pub mirror: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorSettings {
    pub python: String,
    pub script: String,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    pub smoothing: f64,
    pub click_distance: f64,
    pub frame_reduction: u32,
    pub clamp_to_inset: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerSettings {
    /// Log pointer events instead of injecting them.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capture: CaptureSettings::default(),
            detector: DetectorSettings::default(),
            control: ControlSettings::default(),
            pointer: PointerSettings::default(),
            window: WindowSettings::default(),
        }
    }
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            input_format: "v4l2".to_string(),
            device: "/dev/video0".to_string(),
            width: CAM_WIDTH,
            height: CAM_HEIGHT,
            mirror: true,
        }
    }
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            python: ".venv/bin/python".to_string(),
            script: "scripts/hand_detect.py".to_string(),
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING,
            click_distance: CLICK_DIST,
            frame_reduction: FRAME_REDUCTION,
            clamp_to_inset: true,
        }
    }
}

impl Default for PointerSettings {
    fn default() -> Self {
        Self { dry_run: false }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Gestures Pro V2".to_string(),
            width: CAM_WIDTH as f32,
            height: CAM_HEIGHT as f32,
        }
    }
}

impl Settings {
    /// Layers defaults, an optional `handpilot.toml` (or the file named by
    /// `HANDPILOT_CONFIG`) and `HANDPILOT__SECTION__KEY` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_NAME.to_string());
        let settings: Settings = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix("HANDPILOT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.control.smoothing > 0.0) {
            return Err(SettingsError::Invalid {
                key: "control.smoothing",
                reason: format!("must be positive, got {}", self.control.smoothing),
            });
        }
        if !(self.control.click_distance > 0.0) {
            return Err(SettingsError::Invalid {
                key: "control.click_distance",
                reason: format!("must be positive, got {}", self.control.click_distance),
            });
        }
        let reduction = self.control.frame_reduction;
        let both_sides = reduction.saturating_mul(2);
        if both_sides >= self.capture.width || both_sides >= self.capture.height {
            return Err(SettingsError::Invalid {
                key: "control.frame_reduction",
                reason: format!(
                    "{} leaves no inset inside a {}x{} frame",
                    reduction, self.capture.width, self.capture.height
                ),
            });
        }
        Ok(())
    }

    // Sets the camera device, this will override the default configuration.
    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.capture.device = device.into();
        self
    }

    // Adjusts the smoothing divisor, this will override the default configuration.
    pub fn smoothing(mut self, smoothing: f64) -> Self {
        self.control.smoothing = smoothing;
        self
    }

    // Adjusts the pinch distance, this will override the default configuration.
    pub fn click_distance(mut self, click_distance: f64) -> Self {
        self.control.click_distance = click_distance;
        self
    }

    // Adjusts the inset margin, this will override the default configuration.
    pub fn frame_reduction(mut self, frame_reduction: u32) -> Self {
        self.control.frame_reduction = frame_reduction;
        self
    }

    // Enables dry-run pointer output, this will override the default configuration.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.pointer.dry_run = dry_run;
        self
    }
}
