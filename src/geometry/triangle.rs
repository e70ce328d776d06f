use crate::geometry::{Intersection, MaterialId, Mesh, Primitive};
use crate::math::{Bounds3, Point3, Ray, Vec3};

/// Below this magnitude the determinant is treated as zero: the ray runs
/// parallel to the triangle's plane or the triangle is degenerate.
///
/// This is absolute, not scaled by the triangle's edge lengths, so triangles
/// with edges much shorter than ~1e-4 scene units will be rejected outright.
pub const DETERMINANT_EPSILON: f32 = 1e-8;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
    pub n1: Vec3,
    pub n2: Vec3,
    pub n3: Vec3,
    bounds: Bounds3,
    pub material_id: MaterialId,
}

impl Triangle {
    pub fn new(positions: [Point3; 3], normals: [Vec3; 3], material_id: MaterialId) -> Self {
        let [p1, p2, p3] = positions;
        let [n1, n2, n3] = normals;
        Triangle {
            p1,
            p2,
            p3,
            n1,
            n2,
            n3,
            bounds: Bounds3::from_point(p1).expand(p2).expand(p3),
            material_id,
        }
    }

    /// Copies three vertices out of a mesh. Indices must be in range.
    pub fn from_mesh(mesh: &Mesh, v1: usize, v2: usize, v3: usize) -> Self {
        debug_assert!(
            v1.max(v2).max(v3) < mesh.positions.len().min(mesh.normals.len()),
            "vertex index out of range: {} {} {}",
            v1,
            v2,
            v3
        );
        Triangle::new(
            [mesh.positions[v1], mesh.positions[v2], mesh.positions[v3]],
            [mesh.normals[v1], mesh.normals[v2], mesh.normals[v3]],
            mesh.material_id,
        )
    }

    // Moller-Trumbore. returns (t, b1, b2) where b1 weights p2 and b2 weights p3,
    // only if the hit lies inside the closed triangle and inside the ray interval.
    #[inline]
    fn solve(&self, r: &Ray) -> Option<(f32, f32, f32)> {
        let e1 = self.p2 - self.p1;
        let e2 = self.p3 - self.p1;
        let s = r.origin - self.p1;
        let s1 = r.direction.cross(e2);

        let det = s1 * e1;
        if det.abs() < DETERMINANT_EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;

        let b1 = inv_det * (s1 * s);
        if b1 < 0.0 || b1 > 1.0 {
            return None;
        }

        let s2 = s.cross(e1);
        let b2 = inv_det * (s2 * r.direction);
        if b2 < 0.0 || b1 + b2 > 1.0 {
            return None;
        }

        let time = inv_det * (s2 * e2);
        if !r.contains(time) {
            return None;
        }
        Some((time, b1, b2))
    }
}

impl Primitive for Triangle {
    fn bounding_box(&self) -> Bounds3 {
        self.bounds
    }

    fn has_intersection(&self, r: &Ray) -> bool {
        self.solve(r).is_some()
    }

    fn intersect(&self, r: &mut Ray) -> Option<Intersection<'_>> {
        let (time, b1, b2) = self.solve(r)?;
        let b0 = 1.0 - b1 - b2;

        let normal = (b0 * self.n1 + b1 * self.n2 + b2 * self.n3).normalized();
        let point = r.point_at_parameter(time);
        r.tmax = time;
        Some(Intersection::new(time, point, normal, self, self.material_id))
    }

    fn material_id(&self) -> MaterialId {
        self.material_id
    }
}
