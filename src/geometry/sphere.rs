use crate::geometry::{Intersection, MaterialId, Primitive};
use crate::math::{Bounds3, Point3, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Point3,
    pub radius: f32,
    radius_squared: f32,
    pub material_id: MaterialId,
}

impl Sphere {
    pub fn new(radius: f32, origin: Point3, material_id: MaterialId) -> Sphere {
        debug_assert!(radius > 0.0 && radius.is_finite(), "{}", radius);
        Sphere {
            origin,
            radius,
            radius_squared: radius * radius,
            material_id,
        }
    }

    /// Solves `|o + t*d - c|^2 = r^2` for `t`, ignoring the ray interval.
    ///
    /// Returns both real roots, smaller first, or `None` when the ray misses
    /// the sphere entirely. A tangent ray yields two equal roots.
    pub fn test(&self, r: &Ray) -> Option<(f32, f32)> {
        let oc: Vec3 = r.origin - self.origin;
        let a = r.direction * r.direction;
        // a zero length direction would divide by zero below
        debug_assert!(a > 0.0, "degenerate ray direction {:?}", r.direction);
        let b = 2.0 * (oc * r.direction);
        let c = oc * oc - self.radius_squared;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let discriminant_sqrt = discriminant.sqrt();
        let inv_denominator = 1.0 / (2.0 * a);
        let mut t1 = (-b - discriminant_sqrt) * inv_denominator;
        let mut t2 = (-b + discriminant_sqrt) * inv_denominator;
        if t1 > t2 {
            std::mem::swap(&mut t1, &mut t2);
        }
        Some((t1, t2))
    }
}

impl Primitive for Sphere {
    fn bounding_box(&self) -> Bounds3 {
        let extent = Vec3::new(self.radius, self.radius, self.radius);
        Bounds3::new(self.origin - extent, self.origin + extent)
    }

    fn has_intersection(&self, r: &Ray) -> bool {
        match self.test(r) {
            Some((t1, t2)) => r.contains(t1) || r.contains(t2),
            None => false,
        }
    }

    fn intersect(&self, r: &mut Ray) -> Option<Intersection<'_>> {
        let (t1, t2) = self.test(r)?;
        // near root first so the front surface occludes the back one
        let time = if r.contains(t1) {
            t1
        } else if r.contains(t2) {
            t2
        } else {
            return None;
        };

        let point = r.point_at_parameter(time);
        let normal = (point - self.origin).normalized();
        r.tmax = time;
        Some(Intersection::new(time, point, normal, self, self.material_id))
    }

    fn material_id(&self) -> MaterialId {
        self.material_id
    }
}
