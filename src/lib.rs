//! Hand landmark geometry.
//!
//! This crate consumes the 21-point hand landmark output of an external
//! hand-tracking model (behind the [`tracker::HandTracker`] trait) and derives
//! per-finger curl verdicts and finger-joint angles from it, plus the overlay
//! text a display layer renders on top of the camera feed. Pose estimation,
//! camera capture, and drawing all live outside this crate.
//!
//! # Coordinates
//!
//! Landmark positions are integer pixel coordinates in image space: origin at
//! the top-left corner, Y growing *downward*. The curl classification relies
//! on this convention ("tip above joint" means a numerically smaller Y).
//!
//! ```
//! use mudra::gesture::classify_fingers;
//! use mudra::landmark::{HandFrame, Landmark};
//!
//! // A synthetic frame with every fingertip above the joint it is compared to.
//! let frame = HandFrame::new(std::array::from_fn(|i| {
//!     let y = match i {
//!         4 | 8 | 12 | 16 | 20 => 40,
//!         _ => 80,
//!     };
//!     Landmark::new(i as i32 * 10, y)
//! }));
//! assert!(classify_fingers(&frame).all_closed());
//! ```

use log::LevelFilter;

pub mod gesture;
pub mod landmark;
pub mod overlay;
pub mod tracker;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; `RUST_LOG`
/// overrides apply on top.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
