//! The hand-tracking seam.
//!
//! Pose estimation itself is out of scope for this crate: a [`HandTracker`] is
//! an opaque capability that turns a camera image into zero or more sets of
//! normalized hand landmarks. This module converts that raw model output into
//! pixel-space [`HandFrame`]s the classifier operates on.

use std::fmt;

use image::RgbImage;

use crate::landmark::{HandFrame, Landmark, NUM_LANDMARKS};

/// Width and height of a camera image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// One detected hand as the tracking model reports it: 21 landmark positions
/// in normalized image coordinates (0.0 to 1.0 relative to the image size).
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedHand {
    points: [[f32; 2]; NUM_LANDMARKS],
}

impl NormalizedHand {
    pub fn new(points: [[f32; 2]; NUM_LANDMARKS]) -> Self {
        Self { points }
    }

    /// Converts the normalized positions to pixel coordinates.
    ///
    /// Each coordinate is scaled by the image dimension and truncated to an
    /// integer, matching the convention of the hand-tracking model's reference
    /// pipeline.
    pub fn to_pixels(&self, resolution: Resolution) -> HandFrame {
        HandFrame::new(self.points.map(|[x, y]| {
            Landmark::new(
                (x * resolution.width() as f32) as i32,
                (y * resolution.height() as f32) as i32,
            )
        }))
    }
}

/// An external hand-tracking capability: image in, detected hands out.
///
/// Implementations wrap whatever landmark model the application uses. A frame
/// with no detected hands is a normal outcome and yields an empty list, not an
/// error; errors are reserved for detector failures.
pub trait HandTracker {
    fn detect(&mut self, image: &RgbImage) -> anyhow::Result<Vec<NormalizedHand>>;
}

/// Runs `tracker` on `image` and converts every detected hand to pixel
/// coordinates.
pub fn detect_hand_frames<T: HandTracker + ?Sized>(
    tracker: &mut T,
    image: &RgbImage,
) -> anyhow::Result<Vec<HandFrame>> {
    let resolution = Resolution::new(image.width(), image.height());
    let hands = tracker.detect(image)?;
    log::trace!("{} hand(s) detected at {}", hands.len(), resolution);

    Ok(hands
        .iter()
        .map(|hand| hand.to_pixels(resolution))
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::landmark::LandmarkIdx;

    use super::*;

    /// Reports one fixed hand with every landmark at the same normalized spot.
    struct FixedTracker {
        hands: Vec<NormalizedHand>,
    }

    impl HandTracker for FixedTracker {
        fn detect(&mut self, _image: &RgbImage) -> anyhow::Result<Vec<NormalizedHand>> {
            Ok(self.hands.clone())
        }
    }

    #[test]
    fn normalized_coordinates_scale_and_truncate() {
        let hand = NormalizedHand::new([[0.5, 0.25]; NUM_LANDMARKS]);
        let frame = hand.to_pixels(Resolution::new(641, 481));

        // 0.5 * 641 = 320.5 and 0.25 * 481 = 120.25, both truncated.
        let wrist = frame.get(LandmarkIdx::Wrist);
        assert_eq!(wrist.x(), 320);
        assert_eq!(wrist.y(), 120);
    }

    #[test]
    fn no_detected_hand_is_not_an_error() {
        let mut tracker = FixedTracker { hands: Vec::new() };
        let image = RgbImage::new(640, 480);
        let frames = detect_hand_frames(&mut tracker, &image).unwrap();
        assert!(frames.is_empty());
    }

    #[test]
    fn detected_hands_come_back_in_pixel_space() {
        let mut tracker = FixedTracker {
            hands: vec![NormalizedHand::new([[0.25, 0.75]; NUM_LANDMARKS])],
        };
        let image = RgbImage::new(640, 480);
        let frames = detect_hand_frames(&mut tracker, &image).unwrap();

        assert_eq!(frames.len(), 1);
        let tip = frames[0].get(LandmarkIdx::IndexFingerTip);
        assert_eq!(tip.x(), 160);
        assert_eq!(tip.y(), 360);
    }
}
