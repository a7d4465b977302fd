//! Axis and reading-direction decisions for track-style elements.
//!
//! Layout, hit-testing and drawing code is written once against the
//! canonical horizontal vocabulary (`width`, `scrollLeft`, `clientX`, ...).
//! An [`Orientation`] value translates attribute names, pointer math,
//! context transforms and cursor choices to the axis and direction the
//! element actually uses, so none of that code branches on orientation
//! itself.

use thiserror::Error;

use crate::canvas::DrawContext;
use crate::util::capitalize;

/// Error produced when an attribute lookup leaves the fixed vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrientationError {
    /// The queried name has no vertical counterpart in the mapping table.
    #[error("attribute '{attr}' is not in the orientation attribute vocabulary")]
    UnsupportedAttribute { attr: String },
}

/// Bounding box of a track's wrapper element, addressed by edges.
///
/// Only the four edge coordinates matter here; callers usually build one
/// from their toolkit's rectangle type. Edges can also be looked up by
/// name so orientation-mapped code stays generic.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bbox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bbox {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds the box from an origin and a size.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            left: x,
            top: y,
            right: x + w,
            bottom: y + h,
        }
    }

    pub fn width(self) -> f64 {
        self.right - self.left
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Resolves one of the four edge names to its coordinate.
    ///
    /// Only `"left"`, `"top"`, `"right"` and `"bottom"` are addressable.
    pub fn edge(self, name: &str) -> Result<f64, OrientationError> {
        match name {
            "left" => Ok(self.left),
            "top" => Ok(self.top),
            "right" => Ok(self.right),
            "bottom" => Ok(self.bottom),
            _ => Err(OrientationError::UnsupportedAttribute {
                attr: name.to_string(),
            }),
        }
    }
}

/// Canonical horizontal attribute names and their vertical counterparts.
///
/// This table is the whole vocabulary: the rest of the system may only
/// query names listed in its left column.
const VERTICAL_ATTRS: [(&str, &str); 16] = [
    ("width", "height"),
    ("height", "width"),
    ("overflowX", "overflowY"),
    ("overflowY", "overflowX"),
    ("clientWidth", "clientHeight"),
    ("clientHeight", "clientWidth"),
    ("clientX", "clientY"),
    ("clientY", "clientX"),
    ("scrollWidth", "scrollHeight"),
    ("scrollLeft", "scrollTop"),
    ("offsetLeft", "offsetTop"),
    ("offsetHeight", "offsetWidth"),
    ("left", "top"),
    ("right", "bottom"),
    ("top", "left"),
    ("bottom", "right"),
];

/// Axis- and direction-dependent behaviour for one track-style element,
/// resolved once and queried everywhere.
///
/// Values are immutable. When the element's axis or reading direction
/// changes, the owner constructs a new value and replaces the old one.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Orientation {
    /// The canonical case: the track runs along the x axis and all
    /// operations pass through unchanged.
    Horizontal { rtl: bool },
    /// The track runs along the y axis; attribute names are remapped and
    /// drawing swaps the axes.
    Vertical { rtl: bool },
}

impl Orientation {
    /// Selects the orientation for one element configuration.
    ///
    /// `vertical` picks the variant; `rtl` reverses the direction progress
    /// is measured in. All four combinations are valid.
    pub fn new(rtl: bool, vertical: bool) -> Self {
        let orientation = if vertical {
            Orientation::Vertical { rtl }
        } else {
            Orientation::Horizontal { rtl }
        };
        tracing::trace!("selected {:?}", orientation);
        orientation
    }

    /// Whether progress is measured from the trailing edge inward.
    pub fn rtl(self) -> bool {
        match self {
            Orientation::Horizontal { rtl } | Orientation::Vertical { rtl } => rtl,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical { .. })
    }

    pub fn is_horizontal(self) -> bool {
        !self.is_vertical()
    }

    /// Maps a canonical attribute name to the name appropriate for this
    /// orientation.
    ///
    /// The horizontal variant is the identity and accepts any name. The
    /// vertical variant resolves the name against the fixed table and
    /// returns [`OrientationError::UnsupportedAttribute`] for anything
    /// outside it.
    pub fn attr_for<'a>(self, attr: &'a str) -> Result<&'a str, OrientationError> {
        match self {
            Orientation::Horizontal { .. } => Ok(attr),
            Orientation::Vertical { .. } => VERTICAL_ATTRS
                .iter()
                .find(|&&(canonical, _)| canonical == attr)
                .map(|&(_, vertical)| vertical)
                .ok_or_else(|| {
                    tracing::debug!("no vertical counterpart for attribute '{}'", attr);
                    OrientationError::UnsupportedAttribute {
                        attr: attr.to_string(),
                    }
                }),
        }
    }

    /// Builds a compound camel-case property name of the shape
    /// `before + Capitalize(attr_for(attr)) + Capitalize(after)`.
    ///
    /// `before` keeps its casing. Horizontally, `("scroll", "left", "Into")`
    /// gives `"scrollLeftInto"`; vertically it gives `"scrollTopInto"`.
    pub fn wrapped_attr_for(
        self,
        before: &str,
        attr: &str,
        after: &str,
    ) -> Result<String, OrientationError> {
        let mapped = self.attr_for(attr)?;
        Ok(format!("{}{}{}", before, capitalize(mapped), capitalize(after)))
    }

    /// Converts a pointer coordinate along the progress axis into pixels
    /// travelled from the track's start edge.
    ///
    /// `pos` is expected in orientation-correct space already, i.e. the
    /// `clientX`/`clientY` the caller read through
    /// [`attr_for`](Self::attr_for). With `rtl` the distance is measured
    /// from the trailing edge inward. The result is not clamped and may be
    /// negative or exceed the track length.
    pub fn progress_pixels(self, wrapper: Bbox, pos: f64) -> f64 {
        // Edge names stay inside the fixed vocabulary and map to edge
        // names under either orientation.
        let edge = |canonical: &str| -> f64 {
            let name = self
                .attr_for(canonical)
                .expect("edge names are in the attribute vocabulary");
            wrapper
                .edge(name)
                .expect("mapped edge names are box edges")
        };
        if self.rtl() {
            edge("right") - pos
        } else {
            pos - edge("left")
        }
    }

    /// Prepares a drawing context so that code drawing in the horizontal
    /// vocabulary renders correctly for this orientation.
    ///
    /// The horizontal variant leaves the context untouched. The vertical
    /// variant replaces the current transform with an axis swap. Nothing
    /// is saved or restored; callers scope the context themselves.
    pub fn canvas_transform(self, ctx: &mut dyn DrawContext) {
        match self {
            Orientation::Horizontal { .. } => {}
            Orientation::Vertical { .. } => {
                // Maps (x, y) to (y, x).
                ctx.set_transform(0.0, 1.0, 1.0, 0.0, 0.0, 0.0);
            }
        }
    }

    /// The CSS cursor token for a drag-to-resize affordance on this axis.
    pub fn resize_cursor(self) -> &'static str {
        match self {
            Orientation::Horizontal { .. } => "col-resize",
            Orientation::Vertical { .. } => "row-resize",
        }
    }
}
