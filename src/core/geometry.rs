use nalgebra::{Point2, Point3, Vector2};

/// An ordered triple of vertex indices. Winding order is significant: it
/// decides the sign of the screen-space facing normal.
pub type Triangle = [usize; 3];

/// A (u, v) texture coordinate, stored per triangle-vertex slot.
pub type TexCoord = Vector2<f32>;

/// A vertex after the full transform pipeline.
/// Produced fresh every draw call, index-aligned with the mesh's vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenVertex {
    /// Post-divide normalized device coordinates. Face classification runs on these.
    pub ndc: Point3<f32>,
    /// Pixel-space position (origin top-left, +Y down).
    pub screen: Point2<f32>,
}

impl ScreenVertex {
    pub fn new(ndc: Point3<f32>, screen: Point2<f32>) -> Self {
        Self { ndc, screen }
    }

    /// False when a clip-space `w` of zero left infinities or NaNs behind.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.screen.x.is_finite()
            && self.screen.y.is_finite()
            && self.ndc.coords.iter().all(|c| c.is_finite())
    }
}
