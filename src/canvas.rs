//! The drawing-context surface the orientation layer touches.
//!
//! Whatever owns the real 2D context (a GPU canvas, a recording display
//! list, an FFI handle) implements [`DrawContext`]; the orientation layer
//! only ever replaces the current affine transform through it.

/// A 2D drawing surface with a replaceable affine transform.
///
/// The six components follow the usual 2D affine convention
/// `[a, b, c, d, e, f]`, mapping a point `(x, y)` to
/// `(a * x + c * y + e, b * x + d * y + f)`.
pub trait DrawContext {
    /// Replaces the current transform with the given matrix.
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64);
}

/// A plain affine matrix in the `[a, b, c, d, e, f]` convention.
///
/// Doubles as the simplest possible [`DrawContext`]: setting the transform
/// just replaces the components. Useful in tests and for callers that
/// forward a matrix to their real backend.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform2D {
    /// The identity transform `[1, 0, 0, 1, 0, 0]`.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// The components in `[a, b, c, d, e, f]` order.
    pub fn as_array(self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Maps a point through this transform.
    pub fn apply(self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DrawContext for Transform2D {
    fn set_transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) {
        *self = Self { a, b, c, d, e, f };
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawContext, Transform2D};
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_the_identity() {
        assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
        assert_eq!(
            Transform2D::IDENTITY.as_array(),
            [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn identity_leaves_points_alone() {
        assert_eq!(Transform2D::IDENTITY.apply(3.5, -2.0), (3.5, -2.0));
    }

    #[test]
    fn set_transform_replaces_all_components() {
        let mut m = Transform2D::IDENTITY;
        m.set_transform(0.0, 1.0, 1.0, 0.0, 5.0, 7.0);
        assert_eq!(m.as_array(), [0.0, 1.0, 1.0, 0.0, 5.0, 7.0]);
    }

    #[test]
    fn translation_components_offset_points() {
        let mut m = Transform2D::IDENTITY;
        m.set_transform(1.0, 0.0, 0.0, 1.0, 10.0, -4.0);
        assert_eq!(m.apply(2.0, 3.0), (12.0, -1.0));
    }
}
