use crate::pipeline::types::{
    FingerExtension, GestureIntent, HandLandmarks, SessionMode, SpeedIndicator,
};

/// Decides what a detected hand pose means in the current mode.
///
/// In the menu only the start gesture matters. While playing, pointing
/// drives the cursor and an open palm or a fist raise the speed labels.
pub fn interpret(
    mode: SessionMode,
    fingers: FingerExtension,
    hand: &HandLandmarks,
) -> GestureIntent {
    match mode {
        SessionMode::Menu => {
            if fingers.is_peace_sign() {
                GestureIntent::Start
            } else {
                GestureIntent::Idle
            }
        }
        SessionMode::Playing => {
            if fingers.is_pointing() {
                GestureIntent::Point {
                    fingertip: hand.index_finger_tip(),
                    thumb_tip: hand.thumb_tip(),
                }
            } else if fingers.is_open_palm() {
                GestureIntent::Speed(SpeedIndicator::Accelerate)
            } else if fingers.is_fist() {
                GestureIntent::Speed(SpeedIndicator::Brake)
            } else {
                GestureIntent::Idle
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::services::classifier::fixtures::hand_with_pose;
    use crate::pipeline::types::PixelPoint;

    fn intent_for(mode: SessionMode, bits: u8) -> GestureIntent {
        let fingers = FingerExtension::from_bits(bits);
        let hand = hand_with_pose(fingers, PixelPoint::new(320, 300));
        interpret(mode, fingers, &hand)
    }

    #[test]
    fn menu_only_reacts_to_the_peace_sign() {
        for bits in 0u8..32 {
            let expected = if bits == 0b00110 {
                GestureIntent::Start
            } else {
                GestureIntent::Idle
            };
            assert_eq!(intent_for(SessionMode::Menu, bits), expected, "bits {:05b}", bits);
        }
    }

    #[test]
    fn playing_points_with_index_up_and_middle_down() {
        let fingers = FingerExtension::new([true, true, false, true, false]);
        let hand = hand_with_pose(fingers, PixelPoint::new(320, 300));
        assert_eq!(
            interpret(SessionMode::Playing, fingers, &hand),
            GestureIntent::Point {
                fingertip: hand.index_finger_tip(),
                thumb_tip: hand.thumb_tip(),
            }
        );
    }

    #[test]
    fn playing_speed_labels() {
        assert_eq!(
            intent_for(SessionMode::Playing, 0b11111),
            GestureIntent::Speed(SpeedIndicator::Accelerate)
        );
        assert_eq!(
            intent_for(SessionMode::Playing, 0),
            GestureIntent::Speed(SpeedIndicator::Brake)
        );
    }

    #[test]
    fn playing_ignores_the_peace_sign_and_other_poses() {
        assert_eq!(intent_for(SessionMode::Playing, 0b00110), GestureIntent::Idle);
        assert_eq!(intent_for(SessionMode::Playing, 0b01100), GestureIntent::Idle);
        assert_eq!(intent_for(SessionMode::Playing, 0b00001), GestureIntent::Idle);
    }

    #[test]
    fn playing_intents_are_exhaustive_over_all_poses() {
        let mut points = 0;
        let mut speeds = 0;
        for bits in 0u8..32 {
            match intent_for(SessionMode::Playing, bits) {
                GestureIntent::Point { .. } => points += 1,
                GestureIntent::Speed(_) => speeds += 1,
                GestureIntent::Idle => {}
                GestureIntent::Start => panic!("start intent while playing"),
            }
        }
        assert_eq!(points, 8);
        assert_eq!(speeds, 2);
    }
}
