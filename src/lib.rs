//! Orientation and reading-direction support for track-style widgets
//! (sliders, scrubbers, split panels).
//!
//! Widget code is written once against the canonical horizontal
//! vocabulary; an [`Orientation`] value translates attribute names,
//! pointer math, context transforms and cursor choices to the axis the
//! element actually uses.
//!
//! ```
//! use track_orientation::{Bbox, Orientation};
//!
//! let orientation = Orientation::new(false, true);
//! assert_eq!(orientation.attr_for("scrollLeft").unwrap(), "scrollTop");
//!
//! let track = Bbox::from_xywh(0.0, 10.0, 16.0, 200.0);
//! assert_eq!(orientation.progress_pixels(track, 60.0), 50.0);
//! ```

pub mod canvas;
pub mod orientation;
pub mod util;

pub use canvas::{DrawContext, Transform2D};
pub use orientation::{Bbox, Orientation, OrientationError};
