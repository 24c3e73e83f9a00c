use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Capture Error: {0}")]
    Capture(#[from] CaptureError),
    #[error("Detector Error: {0}")]
    Detector(#[from] DetectorError),
    #[error("Pointer Error: {0}")]
    Pointer(#[from] PointerError),
    #[error("Settings Error: {0}")]
    Settings(#[from] SettingsError),
    #[error("Display Error: {0}")]
    Display(String),
}

// Capture Error Type
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to start capture process '{1}': {0}")]
    SpawnError(std::io::Error, String),
    #[error("Failed to read frame: {0}")]
    ReadError(std::io::Error),
    #[error("Capture process has no stdout")]
    MissingOutput,
    #[error("Frame buffer of {actual} bytes does not match {width}x{height} BGR")]
    BufferSize {
        width: u32,
        height: u32,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("Failed to start detector process '{1}': {0}")]
    SpawnError(std::io::Error, String),
    #[error("Detector script not found at {0}")]
    ScriptNotFound(String),
    #[error("Detector did not signal ready, got: {0:?}")]
    NotReady(String),
    #[error("Detector process has no {0}")]
    MissingPipe(&'static str),
    #[error("Failed to write frame to detector: {0}")]
    WriteError(std::io::Error),
    #[error("Failed to read detector response: {0}")]
    ReadError(std::io::Error),
    #[error("Detector process closed its output")]
    Closed,
}

#[derive(Error, Debug)]
pub enum PointerError {
    #[error("Failed to connect to the pointer service: {0}")]
    Connect(String),
    #[error("Failed to inject pointer event: {0}")]
    Inject(String),
    #[error("Failed to query screen size: {0}")]
    ScreenSize(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LandmarkError {
    #[error("Expected 21 landmarks, got {0}")]
    WrongCount(usize),
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}
