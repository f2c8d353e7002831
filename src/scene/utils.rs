use crate::scene::mesh::Mesh;
use nalgebra::Point3;

/// Analyzes the mesh's bounding box and transforms all vertices
/// so that the mesh is centered at (0,0,0) and fits within [-1, 1].
///
/// Returns the original center and the scaling factor used.
pub fn normalize_and_center_mesh(mesh: &mut Mesh) -> (Point3<f32>, f32) {
    if mesh.vertices().is_empty() {
        return (Point3::origin(), 1.0);
    }

    // 1. Calculate Bounding Box
    let mut min_bound = Point3::new(f32::MAX, f32::MAX, f32::MAX);
    let mut max_bound = Point3::new(f32::MIN, f32::MIN, f32::MIN);
    for position in mesh.vertices() {
        min_bound = min_bound.inf(position);
        max_bound = max_bound.sup(position);
    }

    // 2. Calculate Center and Size
    let center = nalgebra::center(&min_bound, &max_bound);
    let extent = max_bound - min_bound;
    let max_dimension = extent.x.max(extent.y).max(extent.z);

    // Scale to fit in [-1, 1] (size 2.0), with a little padding (1.8)
    let scale_factor = if max_dimension > 1e-6 {
        1.8 / max_dimension
    } else {
        1.0
    };

    // 3. Apply Transform to all vertices
    mesh.map_vertices(|position| {
        *position = Point3::from((*position - center) * scale_factor);
    });

    (center, scale_factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn offset_mesh_is_centered_and_scaled() {
        let mut mesh = Mesh::cube(5.0);
        mesh.map_vertices(|p| *p += Vector3::new(10.0, 0.0, 0.0));

        let (center, scale) = normalize_and_center_mesh(&mut mesh);
        assert_relative_eq!(center, Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(scale, 0.18);

        for p in mesh.vertices() {
            assert_relative_eq!(p.x.abs(), 0.9, epsilon = 1e-6);
        }
    }
}
