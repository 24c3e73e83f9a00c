use crate::error::LandmarkError;
use crate::pipeline::types::geometry::{PixelPoint, Size};

/// Hand landmark indices (MediaPipe hand landmark model convention)
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;
}

pub const LANDMARK_COUNT: usize = 21;

/// Bones drawn when the skeleton is annotated.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = {
    use landmarks::*;
    [
        (WRIST, THUMB_CMC),
        (THUMB_CMC, THUMB_MCP),
        (THUMB_MCP, THUMB_IP),
        (THUMB_IP, THUMB_TIP),
        (WRIST, INDEX_FINGER_MCP),
        (INDEX_FINGER_MCP, INDEX_FINGER_PIP),
        (INDEX_FINGER_PIP, INDEX_FINGER_DIP),
        (INDEX_FINGER_DIP, INDEX_FINGER_TIP),
        (INDEX_FINGER_MCP, MIDDLE_FINGER_MCP),
        (MIDDLE_FINGER_MCP, MIDDLE_FINGER_PIP),
        (MIDDLE_FINGER_PIP, MIDDLE_FINGER_DIP),
        (MIDDLE_FINGER_DIP, MIDDLE_FINGER_TIP),
        (MIDDLE_FINGER_MCP, RING_FINGER_MCP),
        (RING_FINGER_MCP, RING_FINGER_PIP),
        (RING_FINGER_PIP, RING_FINGER_DIP),
        (RING_FINGER_DIP, RING_FINGER_TIP),
        (RING_FINGER_MCP, PINKY_MCP),
        (WRIST, PINKY_MCP),
        (PINKY_MCP, PINKY_PIP),
        (PINKY_PIP, PINKY_DIP),
        (PINKY_DIP, PINKY_TIP),
    ]
};

/// A single landmark: its anatomical index and where it sits in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    pub id: u8,
    pub position: PixelPoint,
}

/// The 21 landmarks of one detected hand, in index order.
///
/// A frame without a hand is represented by `None` at the call site, so a
/// value of this type always has every landmark present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandLandmarks {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Builds the sequence from pixel positions ordered by landmark index.
    pub fn from_pixels(points: &[PixelPoint]) -> Result<Self, LandmarkError> {
        if points.len() != LANDMARK_COUNT {
            return Err(LandmarkError::WrongCount(points.len()));
        }
        let mut landmarks = [Landmark {
            id: 0,
            position: PixelPoint::default(),
        }; LANDMARK_COUNT];
        for (i, point) in points.iter().enumerate() {
            landmarks[i] = Landmark {
                id: i as u8,
                position: *point,
            };
        }
        Ok(Self { landmarks })
    }

    /// Scales detector output (0.0..=1.0 per axis) to whole pixels, truncating.
    pub fn from_normalized(points: &[(f32, f32)], frame: Size) -> Result<Self, LandmarkError> {
        let pixels: Vec<PixelPoint> = points
            .iter()
            .map(|&(x, y)| {
                PixelPoint::new(
                    (x * frame.width as f32) as i32,
                    (y * frame.height as f32) as i32,
                )
            })
            .collect();
        Self::from_pixels(&pixels)
    }

    pub fn get(&self, index: usize) -> PixelPoint {
        self.landmarks[index].position
    }

    pub fn index_finger_tip(&self) -> PixelPoint {
        self.get(landmarks::INDEX_FINGER_TIP)
    }

    pub fn thumb_tip(&self) -> PixelPoint {
        self.get(landmarks::THUMB_TIP)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    /// Bone segments in pixel space, for skeleton drawing.
    pub fn bones(&self) -> impl Iterator<Item = (PixelPoint, PixelPoint)> + '_ {
        HAND_CONNECTIONS
            .iter()
            .map(|&(from, to)| (self.get(from), self.get(to)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Vec<PixelPoint> {
        (0..21).map(|i| PixelPoint::new(i * 10, i * 5)).collect()
    }

    #[test]
    fn ids_follow_index_order() {
        let hand = HandLandmarks::from_pixels(&grid()).unwrap();
        for (i, lm) in hand.iter().enumerate() {
            assert_eq!(lm.id as usize, i);
        }
        assert_eq!(hand.index_finger_tip(), PixelPoint::new(80, 40));
        assert_eq!(hand.thumb_tip(), PixelPoint::new(40, 20));
    }

    #[test]
    fn any_other_length_is_rejected() {
        for len in [0usize, 1, 20, 22, 42] {
            let points = vec![PixelPoint::default(); len];
            assert_eq!(
                HandLandmarks::from_pixels(&points),
                Err(LandmarkError::WrongCount(len))
            );
        }
    }

    #[test]
    fn normalized_coordinates_truncate_to_pixels() {
        let mut points = vec![(0.0f32, 0.0f32); 21];
        points[8] = (0.5, 0.25);
        points[4] = (0.9999, 0.0016);
        let hand = HandLandmarks::from_normalized(&points, Size::new(640, 480)).unwrap();
        assert_eq!(hand.index_finger_tip(), PixelPoint::new(320, 120));
        assert_eq!(hand.thumb_tip(), PixelPoint::new(639, 0));
    }

    #[test]
    fn every_bone_joins_valid_landmarks() {
        for (from, to) in HAND_CONNECTIONS {
            assert!(from < LANDMARK_COUNT && to < LANDMARK_COUNT);
        }
        let hand = HandLandmarks::from_pixels(&grid()).unwrap();
        assert_eq!(hand.bones().count(), HAND_CONNECTIONS.len());
    }
}
