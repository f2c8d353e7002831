use nalgebra::{Point2, Vector2, Vector3};

/// Added to the barycentric denominator so near-degenerate triangles never divide by zero.
pub const DENOMINATOR_EPSILON: f32 = 1e-4;

/// Edge tolerance for the inside test. Slightly over-includes pixels on shared
/// edges so adjacent triangles leave no seams.
pub const INSIDE_EPSILON: f32 = 1e-3;

/// The Gram determinant `d00 * d11 - d01 * d01` of the triangle's two edges
/// (squared doubled area). Zero for collinear vertices.
#[inline]
pub fn barycentric_denominator(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> f32 {
    let e0 = c - a;
    let e1 = b - a;
    let d00 = e0.dot(&e0);
    let d01 = e0.dot(&e1);
    let d11 = e1.dot(&e1);
    d00 * d11 - d01 * d01
}

/// Returns true when the triangle has (numerically) zero area.
#[inline]
pub fn is_degenerate(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> bool {
    barycentric_denominator(a, b, c).abs() < DENOMINATOR_EPSILON
}

/// Calculates the barycentric weights of point `p` with respect to the triangle (a, b, c),
/// using the dot-product formulation.
///
/// Returns `None` for degenerate triangles.
///
/// # Returns
/// A Vector3 where, by construction of the formula:
/// - x: `u`, the weight of the **third** vertex `c`
/// - y: `v`, the weight of the second vertex `b`
/// - z: `w = 1 - u - v`, the weight of the first vertex `a`
pub fn barycentric_coordinates(
    p: Point2<f32>,
    a: Point2<f32>,
    b: Point2<f32>,
    c: Point2<f32>,
) -> Option<Vector3<f32>> {
    let e0 = c - a;
    let e1 = b - a;
    let ep = p - a;

    let d00 = e0.dot(&e0);
    let d01 = e0.dot(&e1);
    let d11 = e1.dot(&e1);
    let d20 = ep.dot(&e0);
    let d21 = ep.dot(&e1);

    let denom = d00 * d11 - d01 * d01;
    if denom.abs() < DENOMINATOR_EPSILON {
        return None;
    }
    let denom = denom + DENOMINATOR_EPSILON;

    let u = (d11 * d20 - d01 * d21) / denom;
    let v = (d00 * d21 - d01 * d20) / denom;

    Some(Vector3::new(u, v, 1.0 - u - v))
}

/// Checks if the barycentric weights represent a point inside the triangle,
/// within `INSIDE_EPSILON`.
#[inline(always)]
pub fn is_inside_triangle(bary: Vector3<f32>) -> bool {
    bary.min() >= -INSIDE_EPSILON
}

/// Interpolates per-triangle-vertex UVs with the weights from
/// [`barycentric_coordinates`]: `u * uv0 + v * uv1 + w * uv2`.
///
/// The weights are applied in their returned order, not re-paired with the
/// vertices they were derived from. Texture coordinates are authored for
/// this pairing, so swapping it visibly mirrors the texture.
#[inline]
pub fn interpolate_uv(bary: Vector3<f32>, uvs: &[Vector2<f32>; 3]) -> Vector2<f32> {
    uvs[0] * bary.x + uvs[1] * bary.y + uvs[2] * bary.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn triangle() -> [Point2<f32>; 3] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(0.0, 100.0),
        ]
    }

    #[test]
    fn interior_point_has_positive_weights_summing_to_one() {
        let [a, b, c] = triangle();
        for p in [
            Point2::new(10.0, 10.0),
            Point2::new(30.0, 50.0),
            Point2::new(60.0, 20.0),
            Point2::new(33.3, 33.3),
        ] {
            let bary = barycentric_coordinates(p, a, b, c).unwrap();
            assert!(bary.x > 0.0 && bary.y > 0.0 && bary.z > 0.0, "{bary:?}");
            assert_abs_diff_eq!(bary.sum(), 1.0, epsilon = 1e-5);
            assert!(is_inside_triangle(bary));
        }
    }

    #[test]
    fn vertices_select_their_weight() {
        let [a, b, c] = triangle();

        let at_a = barycentric_coordinates(a, a, b, c).unwrap();
        assert_abs_diff_eq!(at_a, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-5);

        let at_b = barycentric_coordinates(b, a, b, c).unwrap();
        assert_abs_diff_eq!(at_b, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-5);

        let at_c = barycentric_coordinates(c, a, b, c).unwrap();
        assert_abs_diff_eq!(at_c, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn outside_point_is_rejected() {
        let [a, b, c] = triangle();
        let bary = barycentric_coordinates(Point2::new(80.0, 80.0), a, b, c).unwrap();
        assert!(!is_inside_triangle(bary));

        let bary = barycentric_coordinates(Point2::new(-5.0, 10.0), a, b, c).unwrap();
        assert!(!is_inside_triangle(bary));
    }

    #[test]
    fn edge_tolerance_includes_points_just_outside() {
        let bary = Vector3::new(-0.0005, 0.5, 0.5005);
        assert!(is_inside_triangle(bary));
        let bary = Vector3::new(-0.002, 0.5, 0.502);
        assert!(!is_inside_triangle(bary));
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 10.0);
        let c = Point2::new(20.0, 20.0);
        assert!(is_degenerate(a, b, c));
        assert!(barycentric_coordinates(Point2::new(5.0, 5.0), a, b, c).is_none());
        assert!(!is_degenerate(a, b, Point2::new(20.0, 0.0)));
    }

    #[test]
    fn uv_weights_pair_with_slots_in_order() {
        let uvs = [
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 0.0),
            Vector2::new(0.0, 1.0),
        ];
        // Weight `u` (x) picks the first UV even though it belongs to the third vertex.
        let uv = interpolate_uv(Vector3::new(1.0, 0.0, 0.0), &uvs);
        assert_eq!(uv, Vector2::new(1.0, 0.0));

        let uv = interpolate_uv(Vector3::new(0.25, 0.25, 0.5), &uvs);
        assert_abs_diff_eq!(uv, Vector2::new(0.25, 0.5), epsilon = 1e-6);
    }
}
