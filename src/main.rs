use handpilot::app::GestureApp;
use handpilot::config::Settings;
use handpilot::devices::{
    DryRunPointer, EnigoPointer, FfmpegCamera, MediaPipeDetector, PointerSink,
};
use handpilot::error::AppError;
use handpilot::pipeline::GestureController;
use handpilot::pipeline::types::Size;
use tracing::{Level, info};

const DRY_RUN_SCREEN: Size = Size::new(1920, 1080);

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn main() -> Result<(), AppError> {
    init_logging();
    let settings = Settings::load()?;

    let pointer: Box<dyn PointerSink> = if settings.pointer.dry_run {
        info!("Pointer dry run enabled");
        Box::new(DryRunPointer::new(DRY_RUN_SCREEN))
    } else {
        Box::new(EnigoPointer::new()?)
    };
    let detector = MediaPipeDetector::spawn(&settings.detector)?;
    let camera = FfmpegCamera::open(&settings.capture)?;

    let controller = GestureController::new(
        &settings,
        Box::new(camera),
        Box::new(detector),
        pointer,
    )?;
    GestureApp::start_gui(&settings, controller)
}
