//! Overlay text composition.
//!
//! The display collaborator draws on top of the camera feed; this module only
//! decides *what* to render and *where*. Positions are pixel origins in image
//! space.

use crate::gesture::{AngleBucket, FingerAngles, FingerStates};

/// Pixel origin of the status message.
pub const STATUS_ORIGIN: (i32, i32) = (50, 50);

const ANGLE_ORIGIN: (i32, i32) = (50, 80);
const ANGLE_LINE_SPACING: i32 = 30;

/// One line of overlay text and the origin it is rendered at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub origin: (i32, i32),
}

/// The overall verdict string for a classified hand.
///
/// A closed fist reads "not sick". This is the demo's placeholder rule, not a
/// medical inference of any kind.
pub fn status_message(states: &FingerStates) -> &'static str {
    if states.all_closed() {
        "You're not sick"
    } else {
        "You're sick"
    }
}

/// The status message as a renderable [`TextLine`] at [`STATUS_ORIGIN`].
pub fn status_line(states: &FingerStates) -> TextLine {
    TextLine {
        text: status_message(states).to_owned(),
        origin: STATUS_ORIGIN,
    }
}

/// One `"<FingerName> Angle: <bucket>"` line per finger, stacked below the
/// status message in classification order.
pub fn finger_angle_lines(angles: &FingerAngles) -> Vec<TextLine> {
    angles
        .iter()
        .enumerate()
        .map(|(i, (finger, angle))| TextLine {
            text: format!("{} Angle: {}", finger.name(), AngleBucket::from_degrees(angle)),
            origin: (ANGLE_ORIGIN.0, ANGLE_ORIGIN.1 + i as i32 * ANGLE_LINE_SPACING),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::gesture::{classify_fingers, finger_angles};
    use crate::landmark::{HandFrame, Landmark, NUM_LANDMARKS};

    use super::*;

    fn frame(tip_y: i32) -> HandFrame {
        let mut points: [Landmark; NUM_LANDMARKS] =
            std::array::from_fn(|i| Landmark::new(i as i32 * 10, 100));
        for tip in [4, 8, 12, 16, 20] {
            points[tip] = Landmark::new(tip as i32 * 10, tip_y);
        }
        HandFrame::new(points)
    }

    #[test]
    fn closed_fist_reads_not_sick() {
        let states = classify_fingers(&frame(60));
        assert_eq!(status_message(&states), "You're not sick");
        assert_eq!(status_line(&states).origin, STATUS_ORIGIN);
    }

    #[test]
    fn open_hand_reads_sick() {
        let states = classify_fingers(&frame(140));
        assert_eq!(status_message(&states), "You're sick");
    }

    #[test]
    fn angle_lines_stack_below_the_status() {
        let lines = finger_angle_lines(&finger_angles(&frame(100)));
        assert_eq!(lines.len(), 5);

        // All measured joints are collinear in this frame, so every angle
        // buckets to "90".
        let expected = [
            ("Thumb Angle: 90", (50, 80)),
            ("Index Angle: 90", (50, 110)),
            ("Middle Angle: 90", (50, 140)),
            ("Ring Angle: 90", (50, 170)),
            ("Little Angle: 90", (50, 200)),
        ];
        for (line, (text, origin)) in lines.iter().zip(expected) {
            assert_eq!(line.text, text);
            assert_eq!(line.origin, origin);
        }
    }
}
