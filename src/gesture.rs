//! Finger curl classification and finger-joint angles.
//!
//! Everything in this module is a pure function of a single [`HandFrame`];
//! there is no cross-frame state and no synchronization requirement.

use std::fmt;

use nalgebra::Point2;

use crate::landmark::{HandFrame, LandmarkIdx};

/// The five fingers of a hand, in the fixed classification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    /// All fingers, in classification order.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// The display name used in overlay text.
    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb => "Thumb",
            Finger::Index => "Index",
            Finger::Middle => "Middle",
            Finger::Ring => "Ring",
            Finger::Little => "Little",
        }
    }

    /// The fingertip landmark.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Little => LandmarkIdx::PinkyTip,
        }
    }

    /// The joint the tip is compared against for the curl verdict.
    ///
    /// For the thumb (which bends sideways rather than vertically in the
    /// default landmark pose) this is the IP joint right below the tip; for
    /// the other fingers it is the PIP joint.
    pub fn curl_joint(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Little => LandmarkIdx::PinkyPip,
        }
    }
}

/// Per-finger curl verdicts for one hand, in [`Finger::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerStates {
    closed: [bool; 5],
}

impl FingerStates {
    pub fn is_closed(&self, finger: Finger) -> bool {
        self.closed[finger as usize]
    }

    /// `true` iff every finger is classified as closed (a closed fist).
    pub fn all_closed(&self) -> bool {
        self.closed.iter().all(|&closed| closed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> {
        Finger::ALL.into_iter().zip(self.closed)
    }
}

/// Per-finger joint angles in degrees, in [`Finger::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerAngles {
    degrees: [f32; 5],
}

impl FingerAngles {
    pub fn get(&self, finger: Finger) -> f32 {
        self.degrees[finger as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Finger, f32)> {
        Finger::ALL.into_iter().zip(self.degrees)
    }
}

/// Returns whether a finger is curled, judging by two of its landmarks.
///
/// The finger counts as closed when the tip sits strictly higher on screen
/// than the joint below it (image-space Y grows downward, so "higher" means a
/// smaller Y). Equal heights classify as open.
pub fn is_finger_closed(frame: &HandFrame, tip: LandmarkIdx, joint: LandmarkIdx) -> bool {
    frame.get(tip).y() < frame.get(joint).y()
}

/// Returns whether the thumb is curled.
///
/// Same rule as [`is_finger_closed`], fixed to the thumb's tip and IP joint.
pub fn is_thumb_closed(frame: &HandFrame) -> bool {
    is_finger_closed(frame, LandmarkIdx::ThumbTip, LandmarkIdx::ThumbIp)
}

/// Classifies all five fingers of `frame` as open or closed.
pub fn classify_fingers(frame: &HandFrame) -> FingerStates {
    let mut closed = [false; 5];
    for (finger, slot) in Finger::ALL.into_iter().zip(&mut closed) {
        *slot = is_finger_closed(frame, finger.tip(), finger.curl_joint());
    }

    log::trace!("finger classification: {closed:?}");
    FingerStates { closed }
}

/// Computes the absolute angle at vertex `b` between the rays `b -> a` and
/// `b -> c`, in degrees.
///
/// This is `|degrees(atan2(c - b) - atan2(a - b))|`. The signed difference is
/// *not* normalized, so configurations where the two ray angles straddle the
/// `atan2` branch cut yield results above 180°. Callers that bucket the value
/// (see [`AngleBucket`]) are unaffected.
pub fn angle_degrees(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    radians.to_degrees().abs()
}

/// Computes the five per-finger joint angles of `frame`.
///
/// For finger `f` (0 = thumb .. 4 = little) the angle is measured at landmark
/// `f*4 + 1` between its two numeric neighbors `f*4` and `f*4 + 2`, following
/// the convention of the hand-tracking model's numbering.
pub fn finger_angles(frame: &HandFrame) -> FingerAngles {
    let landmarks = frame.landmarks();
    let mut degrees = [0.0; 5];
    for (finger, out) in degrees.iter_mut().enumerate() {
        let base = finger * 4;
        *out = angle_degrees(
            landmarks[base].position(),
            landmarks[base + 1].position(),
            landmarks[base + 2].position(),
        );
    }

    FingerAngles { degrees }
}

/// Coarse display bucket for a finger angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleBucket {
    Deg0,
    Deg45,
    Deg90,
}

impl AngleBucket {
    /// Buckets an angle for display.
    ///
    /// Both boundaries are strict: exactly 45° still buckets to `Deg0` and
    /// exactly 90° to `Deg45`.
    pub fn from_degrees(angle: f32) -> Self {
        if angle > 90.0 {
            AngleBucket::Deg90
        } else if angle > 45.0 {
            AngleBucket::Deg45
        } else {
            AngleBucket::Deg0
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AngleBucket::Deg0 => "0",
            AngleBucket::Deg45 => "45",
            AngleBucket::Deg90 => "90",
        }
    }
}

impl fmt::Display for AngleBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
