use crate::core::geometry::{TexCoord, Triangle};
use nalgebra::{Point3, Vector2};
use std::fmt;

/// Violations of the mesh authoring contract, rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Every triangle needs exactly one UV triple.
    TexCoordCountMismatch { triangles: usize, tex_coords: usize },
    /// A triangle references a vertex that does not exist.
    IndexOutOfRange {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::TexCoordCountMismatch {
                triangles,
                tex_coords,
            } => write!(
                f,
                "mesh has {triangles} triangles but {tex_coords} texture coordinate triples"
            ),
            MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            } => write!(
                f,
                "triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices"
            ),
        }
    }
}

impl std::error::Error for MeshError {}

/// Static triangle geometry with per-triangle-vertex texture coordinates.
///
/// UVs are indexed by triangle slot, not by vertex, so a shared vertex can
/// carry different UVs on different triangles. A constructed `Mesh` always
/// has one UV triple per triangle and only valid vertex indices.
#[derive(Debug, Clone)]
pub struct Mesh {
    vertices: Vec<Point3<f32>>,
    triangles: Vec<Triangle>,
    tex_coords: Vec<[TexCoord; 3]>,
}

impl Mesh {
    pub fn new(
        vertices: Vec<Point3<f32>>,
        triangles: Vec<Triangle>,
        tex_coords: Vec<[TexCoord; 3]>,
    ) -> Result<Self, MeshError> {
        if triangles.len() != tex_coords.len() {
            return Err(MeshError::TexCoordCountMismatch {
                triangles: triangles.len(),
                tex_coords: tex_coords.len(),
            });
        }

        for (i, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&idx| idx >= vertices.len()) {
                return Err(MeshError::IndexOutOfRange {
                    triangle: i,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Self {
            vertices,
            triangles,
            tex_coords,
        })
    }

    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn tex_coords(&self) -> &[[TexCoord; 3]] {
        &self.tex_coords
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Iterates `(triangle, uv triple)` pairs in authoring order.
    pub fn faces(&self) -> impl Iterator<Item = (&Triangle, &[TexCoord; 3])> {
        self.triangles.iter().zip(self.tex_coords.iter())
    }

    /// Applies `f` to every vertex position.
    pub fn map_vertices(&mut self, f: impl FnMut(&mut Point3<f32>)) {
        self.vertices.iter_mut().for_each(f);
    }

    /// An axis-aligned cube centered on the origin: 8 vertices, 12 triangles,
    /// every face textured with the full [0, 1] square.
    ///
    /// Vertices 0-3 form the `z = -half_size` face.
    pub fn cube(half_size: f32) -> Self {
        let s = half_size;
        let vertices = vec![
            Point3::new(-s, -s, -s),
            Point3::new(s, -s, -s),
            Point3::new(s, s, -s),
            Point3::new(-s, s, -s),
            Point3::new(-s, -s, s),
            Point3::new(s, -s, s),
            Point3::new(s, s, s),
            Point3::new(-s, s, s),
        ];

        #[rustfmt::skip]
        let triangles = vec![
            [0, 1, 2], [2, 3, 0], // front  (z-)
            [1, 5, 6], [6, 2, 1], // right  (x+)
            [5, 4, 7], [7, 6, 5], // back   (z+)
            [4, 0, 3], [3, 7, 4], // left   (x-)
            [3, 2, 6], [6, 7, 3], // top    (y+)
            [4, 5, 1], [1, 0, 4], // bottom (y-)
        ];

        let first = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
        ];
        let second = [
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
            Vector2::new(0.0, 0.0),
        ];
        let tex_coords = (0..6).flat_map(|_| [first, second]).collect();

        Self {
            vertices,
            triangles,
            tex_coords,
        }
    }

    /// The cube with unit edge length.
    pub fn unit_cube() -> Self {
        Self::cube(0.5)
    }

    /// Creates a single triangle in the z = 0 plane for testing purposes.
    pub fn create_test_triangle() -> Self {
        Self {
            vertices: vec![
                Point3::new(0.0, 0.5, 0.0),
                Point3::new(-0.5, -0.5, 0.0),
                Point3::new(0.5, -0.5, 0.0),
            ],
            triangles: vec![[0, 1, 2]],
            tex_coords: vec![[
                Vector2::new(0.5, 1.0),
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
            ]],
        }
    }
}
