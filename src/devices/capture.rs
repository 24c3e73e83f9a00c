use crate::common::Frame;
use crate::config::CaptureSettings;
use crate::error::CaptureError;
use crate::pipeline::types::Size;
use image::RgbImage;
use std::io::{ErrorKind, Read};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::info;

/// Source of camera frames.
pub trait FrameSource {
    /// Blocks for the next frame. `Ok(None)` means the stream has ended.
    fn read(&mut self) -> Result<Option<Frame>, CaptureError>;
}

/// Converts a packed BGR buffer into an RGB image.
pub fn bgr_to_rgb(buffer: &[u8], size: Size) -> Result<RgbImage, CaptureError> {
    let mut rgb: Vec<u8> = Vec::with_capacity(buffer.len());
    // -- pixel order is B G R; swap to R G B
    for chunk in buffer.chunks_exact(3) {
        rgb.extend_from_slice(&[chunk[2], chunk[1], chunk[0]]);
    }
    RgbImage::from_raw(size.width, size.height, rgb).ok_or(CaptureError::BufferSize {
        width: size.width,
        height: size.height,
        actual: buffer.len(),
    })
}

/// Reads fixed-size raw BGR frames back to back from a byte stream.
pub struct RawFrameReader<R> {
    inner: R,
    size: Size,
    buffer: Vec<u8>,
}

impl<R: Read> RawFrameReader<R> {
    pub fn new(inner: R, size: Size) -> Self {
        Self {
            inner,
            size,
            buffer: vec![0; size.width as usize * size.height as usize * 3],
        }
    }
}

impl<R: Read> FrameSource for RawFrameReader<R> {
    fn read(&mut self) -> Result<Option<Frame>, CaptureError> {
        match self.inner.read_exact(&mut self.buffer) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
            Err(e) => return Err(CaptureError::ReadError(e)),
        }
        let image = bgr_to_rgb(&self.buffer, self.size)?;
        Ok(Some(Frame::now(image)))
    }
}

/// Webcam capture through an `ffmpeg` child process emitting `bgr24` frames.
pub struct FfmpegCamera {
    process: Child,
    reader: RawFrameReader<ChildStdout>,
}

impl FfmpegCamera {
    pub fn open(settings: &CaptureSettings) -> Result<Self, CaptureError> {
        let size = Size::new(settings.width, settings.height);
        let video_size = format!("{}x{}", size.width, size.height);
        info!(
            "Opening camera {} ({}) at {}",
            settings.device,
            settings.input_format,
            video_size
        );

        let mut process = Command::new(&settings.ffmpeg_path)
            .args(["-loglevel", "error", "-f", settings.input_format.as_str()])
            .args(["-video_size", video_size.as_str()])
            .args(["-i", settings.device.as_str()])
            .args(["-f", "rawvideo", "-pix_fmt", "bgr24", "-"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| CaptureError::SpawnError(e, settings.ffmpeg_path.clone()))?;

        let stdout = process.stdout.take().ok_or(CaptureError::MissingOutput)?;
        Ok(Self {
            process,
            reader: RawFrameReader::new(stdout, size),
        })
    }
}

impl FrameSource for FfmpegCamera {
    fn read(&mut self) -> Result<Option<Frame>, CaptureError> {
        self.reader.read()
    }
}

impl Drop for FfmpegCamera {
    fn drop(&mut self) {
        // Release the camera device.
        let _ = self.process.kill();
        let _ = self.process.wait();
        info!("Camera released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Cursor;

    #[test]
    fn bgr_is_swapped_to_rgb() {
        let img = bgr_to_rgb(&[1, 2, 3, 4, 5, 6], Size::new(2, 1)).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([3, 2, 1]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([6, 5, 4]));
    }

    #[test]
    fn short_buffer_is_rejected() {
        let err = bgr_to_rgb(&[0; 9], Size::new(2, 2)).unwrap_err();
        assert!(matches!(err, CaptureError::BufferSize { actual: 9, .. }));
    }

    #[test]
    fn reader_yields_whole_frames_then_ends() {
        // Two full 2x2 frames plus a partial one.
        let mut bytes = vec![10u8; 12];
        bytes.extend(vec![20u8; 12]);
        bytes.extend(vec![30u8; 5]);
        let mut reader = RawFrameReader::new(Cursor::new(bytes), Size::new(2, 2));

        let first = reader.read().unwrap().unwrap();
        assert_eq!(first.image().get_pixel(1, 1), &Rgb([10, 10, 10]));
        let second = reader.read().unwrap().unwrap();
        assert_eq!(second.image().get_pixel(0, 0), &Rgb([20, 20, 20]));
        assert_ne!(first.frame_id(), second.frame_id());
        assert!(reader.read().unwrap().is_none());
    }
}
