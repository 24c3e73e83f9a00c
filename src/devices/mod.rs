pub mod capture;
pub mod detector;
pub mod pointer;

pub use capture::{FfmpegCamera, FrameSource, RawFrameReader};
pub use detector::{HandDetector, MediaPipeDetector};
pub use pointer::{DryRunPointer, EnigoPointer, PointerSink};
