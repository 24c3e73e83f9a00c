use crate::pipeline::types::{FingerExtension, HandLandmarks, landmarks};

const FINGER_TIPS: [usize; 4] = [
    landmarks::INDEX_FINGER_TIP,
    landmarks::MIDDLE_FINGER_TIP,
    landmarks::RING_FINGER_TIP,
    landmarks::PINKY_TIP,
];

/// Derives finger extension from one hand's landmarks.
///
/// The thumb counts as extended when its tip is left of its IP joint (the
/// frame is mirrored, so left is outward). Every other finger counts as
/// extended when its tip sits higher on screen than its PIP joint, two
/// landmarks below the tip.
pub fn classify(hand: &HandLandmarks) -> FingerExtension {
    let mut extended = [false; 5];
    extended[0] = hand.get(landmarks::THUMB_TIP).x < hand.get(landmarks::THUMB_IP).x;
    for (slot, tip) in extended[1..].iter_mut().zip(FINGER_TIPS) {
        *slot = hand.get(tip).y < hand.get(tip - 2).y;
    }
    FingerExtension::new(extended)
}
