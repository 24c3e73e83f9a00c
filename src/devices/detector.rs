//! Hand landmark detection through a MediaPipe helper process.
//!
//! The helper (`scripts/hand_detect.py`) reads a 12-byte header (width,
//! height, channels as little-endian `u32`) followed by raw RGB bytes, and
//! answers each frame with one JSON line:
//!
//! ```json
//! {"hands": [{"handedness": "Right", "score": 0.93, "landmarks": [{"x": 0.5, "y": 0.4, "z": 0.0}]}]}
//! ```

use crate::common::Frame;
use crate::config::DetectorSettings;
use crate::error::DetectorError;
use crate::pipeline::types::{HandLandmarks, Size};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tracing::{debug, info, warn};

/// Finds at most one hand in a frame.
pub trait HandDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectorError>;
}

#[derive(Deserialize, Debug)]
struct LandmarkJson {
    x: f32,
    y: f32,
}

#[derive(Deserialize, Debug)]
struct HandJson {
    #[serde(default)]
    handedness: String,
    #[serde(default)]
    score: f32,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Deserialize, Debug)]
struct DetectionResult {
    #[serde(default)]
    hands: Vec<HandJson>,
    #[serde(default)]
    error: Option<String>,
}

/// Frame-in, JSON-line-out exchange with the helper.
pub struct DetectorLink<W, R> {
    writer: W,
    reader: R,
}

impl<W: Write, R: BufRead> DetectorLink<W, R> {
    pub fn new(writer: W, reader: R) -> Self {
        Self { writer, reader }
    }

    pub fn exchange(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectorError> {
        let image = frame.image();
        let header = [image.width(), image.height(), 3u32];
        for value in header {
            self.writer
                .write_all(&value.to_le_bytes())
                .map_err(DetectorError::WriteError)?;
        }
        self.writer
            .write_all(image.as_raw())
            .map_err(DetectorError::WriteError)?;
        self.writer.flush().map_err(DetectorError::WriteError)?;

        let mut response = String::new();
        let read = self
            .reader
            .read_line(&mut response)
            .map_err(DetectorError::ReadError)?;
        if read == 0 {
            return Err(DetectorError::Closed);
        }
        Ok(parse_response(
            &response,
            Size::new(image.width(), image.height()),
        ))
    }
}

/// Malformed replies are logged and treated as "no hand".
fn parse_response(response: &str, frame: Size) -> Option<HandLandmarks> {
    let result: DetectionResult = match serde_json::from_str(response) {
        Ok(result) => result,
        Err(e) => {
            warn!("Failed to parse detector response {:?}: {}", response.trim(), e);
            return None;
        }
    };

    if let Some(error) = result.error {
        warn!("Detector error: {}", error);
        return None;
    }

    let hand = result.hands.into_iter().next()?;
    let points: Vec<(f32, f32)> = hand.landmarks.iter().map(|lm| (lm.x, lm.y)).collect();
    match HandLandmarks::from_normalized(&points, frame) {
        Ok(landmarks) => {
            debug!(
                "Hand detected: {} (score={:.2}), index_tip={:?}",
                hand.handedness,
                hand.score,
                landmarks.index_finger_tip()
            );
            Some(landmarks)
        }
        Err(e) => {
            warn!("Discarding hand: {}", e);
            None
        }
    }
}

/// MediaPipe Hands running in a Python child process.
pub struct MediaPipeDetector {
    process: Child,
    link: DetectorLink<ChildStdin, BufReader<ChildStdout>>,
}

impl MediaPipeDetector {
    pub fn spawn(settings: &DetectorSettings) -> Result<Self, DetectorError> {
        if !Path::new(&settings.script).exists() {
            return Err(DetectorError::ScriptNotFound(settings.script.clone()));
        }

        info!("Starting MediaPipe hand detector subprocess...");
        let mut process = Command::new(&settings.python)
            .arg(&settings.script)
            .arg(settings.min_detection_confidence.to_string())
            .arg(settings.min_tracking_confidence.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| DetectorError::SpawnError(e, settings.python.clone()))?;

        match Self::attach(&mut process) {
            Ok(link) => {
                info!("MediaPipe hand detector ready");
                Ok(Self { process, link })
            }
            Err(e) => {
                stop(&mut process);
                Err(e)
            }
        }
    }

    fn attach(
        process: &mut Child,
    ) -> Result<DetectorLink<ChildStdin, BufReader<ChildStdout>>, DetectorError> {
        let stdin = process.stdin.take().ok_or(DetectorError::MissingPipe("stdin"))?;
        let stdout = process
            .stdout
            .take()
            .ok_or(DetectorError::MissingPipe("stdout"))?;
        let mut reader = BufReader::new(stdout);
        await_ready(&mut reader)?;
        Ok(DetectorLink::new(stdin, reader))
    }
}

/// Waits for the helper's `READY` line.
fn await_ready<R: BufRead>(reader: &mut R) -> Result<(), DetectorError> {
    let mut ready = String::new();
    reader
        .read_line(&mut ready)
        .map_err(DetectorError::ReadError)?;
    if ready.trim() != "READY" {
        return Err(DetectorError::NotReady(ready));
    }
    Ok(())
}

fn stop(process: &mut Child) {
    let _ = process.kill();
    let _ = process.wait();
}

impl HandDetector for MediaPipeDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Option<HandLandmarks>, DetectorError> {
        self.link.exchange(frame)
    }
}

impl Drop for MediaPipeDetector {
    fn drop(&mut self) {
        stop(&mut self.process);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::types::PixelPoint;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn hand_json(count: usize) -> String {
        let landmarks: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"x": {}, "y": 0.5, "z": 0.0}}"#, i as f32 / 40.0))
            .collect();
        format!(
            r#"{{"hands": [{{"handedness": "Right", "score": 0.9, "landmarks": [{}]}}]}}"#,
            landmarks.join(", ")
        )
    }

    fn frame() -> Frame {
        Frame::now(RgbImage::from_pixel(4, 2, Rgb([7, 8, 9])))
    }

    #[test]
    fn exchange_writes_header_and_pixels() {
        let mut written = Vec::new();
        let reply = Cursor::new(b"{\"hands\": []}\n".to_vec());
        let mut link = DetectorLink::new(&mut written, reply);
        assert_eq!(link.exchange(&frame()).unwrap(), None);

        assert_eq!(&written[0..4], &4u32.to_le_bytes());
        assert_eq!(&written[4..8], &2u32.to_le_bytes());
        assert_eq!(&written[8..12], &3u32.to_le_bytes());
        assert_eq!(written.len(), 12 + 4 * 2 * 3);
        assert_eq!(&written[12..15], &[7, 8, 9]);
    }

    #[test]
    fn first_hand_is_scaled_to_pixels() {
        let hand = parse_response(&hand_json(21), Size::new(640, 480)).unwrap();
        assert_eq!(hand.index_finger_tip(), PixelPoint::new(128, 240));
        assert_eq!(hand.get(0), PixelPoint::new(0, 240));
    }

    #[test]
    fn wrong_landmark_count_means_no_hand() {
        assert!(parse_response(&hand_json(20), Size::new(640, 480)).is_none());
    }

    #[test]
    fn error_and_garbage_replies_mean_no_hand() {
        let size = Size::new(640, 480);
        assert!(parse_response(r#"{"hands": [], "error": "boom"}"#, size).is_none());
        assert!(parse_response("not json", size).is_none());
    }

    #[test]
    fn handshake_requires_ready_line() {
        assert!(await_ready(&mut Cursor::new(b"READY\n".to_vec())).is_ok());
        assert!(matches!(
            await_ready(&mut Cursor::new(b"Traceback\n".to_vec())),
            Err(DetectorError::NotReady(line)) if line == "Traceback\n"
        ));
        assert!(matches!(
            await_ready(&mut Cursor::new(Vec::new())),
            Err(DetectorError::NotReady(line)) if line.is_empty()
        ));
    }

    #[cfg(unix)]
    #[test]
    fn helper_that_never_gets_ready_is_stopped() {
        let script = std::env::temp_dir().join(format!(
            "handpilot-not-ready-{}.sh",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&script, "echo loading\nsleep 30\n").unwrap();
        let settings = DetectorSettings {
            python: "sh".to_string(),
            script: script.to_string_lossy().into_owned(),
            ..DetectorSettings::default()
        };

        let started = std::time::Instant::now();
        let result = MediaPipeDetector::spawn(&settings);
        std::fs::remove_file(&script).unwrap();

        assert!(matches!(result, Err(DetectorError::NotReady(line)) if line == "loading\n"));
        // The sleeping child was killed rather than waited out.
        assert!(started.elapsed() < std::time::Duration::from_secs(10));
    }

    #[test]
    fn closed_output_is_an_error() {
        let mut written = Vec::new();
        let mut link = DetectorLink::new(&mut written, Cursor::new(Vec::new()));
        assert!(matches!(link.exchange(&frame()), Err(DetectorError::Closed)));
    }
}
