//! Hand landmark data model.

use anyhow::bail;
use nalgebra::Point2;

/// Number of landmarks the hand-tracking model produces per detected hand.
pub const NUM_LANDMARKS: usize = 21;

/// Names for the hand pose landmarks.
///
/// The numbering is fixed by the external hand-tracking model and is never
/// reordered: `Wrist` is 0, each finger occupies four consecutive indices from
/// its base joint to its tip.
///
/// # Terminology
///
/// - **CMC**: Carpometacarpal joint, the lowest joint of the thumb, located near the wrist.
/// - **MCP**: Metacarpophalangeal joint, the lower joint forming the knuckles near the palm of
///   the hand.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Landmark pairs to connect when drawing the hand skeleton.
///
/// This is the connection table of the external hand model, exposed for the
/// display collaborator. It is not interpreted by this crate.
pub const CONNECTIVITY: &[(LandmarkIdx, LandmarkIdx)] = {
    use LandmarkIdx::*;
    &[
        // Surround the palm:
        (Wrist, ThumbCmc),
        (ThumbCmc, IndexFingerMcp),
        (IndexFingerMcp, MiddleFingerMcp),
        (MiddleFingerMcp, RingFingerMcp),
        (RingFingerMcp, PinkyMcp),
        (PinkyMcp, Wrist),
        // Thumb:
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index:
        (IndexFingerMcp, IndexFingerPip),
        (IndexFingerPip, IndexFingerDip),
        (IndexFingerDip, IndexFingerTip),
        // Middle:
        (MiddleFingerMcp, MiddleFingerPip),
        (MiddleFingerPip, MiddleFingerDip),
        (MiddleFingerDip, MiddleFingerTip),
        // Ring:
        (RingFingerMcp, RingFingerPip),
        (RingFingerPip, RingFingerDip),
        (RingFingerDip, RingFingerTip),
        // Pinky:
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
    ]
};

/// One tracked point on a detected hand, in integer pixel coordinates.
///
/// Image space: origin top-left, Y grows downward. The landmark's identity is
/// its position inside the owning [`HandFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landmark {
    x: i32,
    y: i32,
}

impl Landmark {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the position as a float point for geometric math.
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x as f32, self.y as f32)
    }
}

/// The landmarks of one detected hand in one frame.
///
/// Invariant: always exactly [`NUM_LANDMARKS`] entries, positionally indexed
/// by [`LandmarkIdx`]. A frame is never mutated after creation and carries no
/// state across frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandFrame {
    landmarks: [Landmark; NUM_LANDMARKS],
}

impl HandFrame {
    pub fn new(landmarks: [Landmark; NUM_LANDMARKS]) -> Self {
        Self { landmarks }
    }

    /// Creates a [`HandFrame`] from a slice of landmarks.
    ///
    /// Fails if `landmarks` does not contain exactly [`NUM_LANDMARKS`]
    /// entries; a frame with any other landmark count is malformed detector
    /// output and must not be classified.
    pub fn from_slice(landmarks: &[Landmark]) -> anyhow::Result<Self> {
        if landmarks.len() != NUM_LANDMARKS {
            bail!(
                "expected {} hand landmarks, got {}",
                NUM_LANDMARKS,
                landmarks.len()
            );
        }

        let mut arr = [Landmark::new(0, 0); NUM_LANDMARKS];
        arr.copy_from_slice(landmarks);
        Ok(Self { landmarks: arr })
    }

    /// Returns the landmark at `index`.
    pub fn get(&self, index: LandmarkIdx) -> Landmark {
        self.landmarks[index as usize]
    }

    /// Returns all landmarks in model order.
    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    /// Resolves [`CONNECTIVITY`] against this frame's landmark positions.
    ///
    /// Yields the endpoint pairs of every skeleton segment the display layer
    /// should draw.
    pub fn connections(&self) -> impl Iterator<Item = (Landmark, Landmark)> + '_ {
        CONNECTIVITY.iter().map(|&(a, b)| (self.get(a), self.get(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_frame() -> HandFrame {
        HandFrame::new(std::array::from_fn(|i| Landmark::new(i as i32, i as i32 * 2)))
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(HandFrame::from_slice(&[]).is_err());
        assert!(HandFrame::from_slice(&[Landmark::new(0, 0); 20]).is_err());
        assert!(HandFrame::from_slice(&[Landmark::new(0, 0); 22]).is_err());
        assert!(HandFrame::from_slice(&[Landmark::new(0, 0); 21]).is_ok());
    }

    #[test]
    fn indexing_follows_model_order() {
        let frame = sequential_frame();
        assert_eq!(frame.get(LandmarkIdx::Wrist), Landmark::new(0, 0));
        assert_eq!(frame.get(LandmarkIdx::ThumbTip), Landmark::new(4, 8));
        assert_eq!(frame.get(LandmarkIdx::IndexFingerTip), Landmark::new(8, 16));
        assert_eq!(frame.get(LandmarkIdx::PinkyTip), Landmark::new(20, 40));
        assert_eq!(frame.landmarks().len(), NUM_LANDMARKS);
    }

    #[test]
    fn connectivity_covers_every_landmark() {
        let frame = sequential_frame();
        let mut seen = [false; NUM_LANDMARKS];
        for (a, b) in frame.connections() {
            seen[a.x() as usize] = true;
            seen[b.x() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
