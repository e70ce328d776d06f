use crate::geometry::{Intersection, Primitive, PrimitiveEnum};
use crate::math::{Bounds3, Ray};

/// Flat collection of primitives, queried front to back by brute force.
///
/// Closest-hit falls out of the ray interval: each accepted hit shrinks
/// `tmax`, so every later member can only replace it with a nearer one.
#[derive(Clone, Debug, Default)]
pub struct PrimitiveList {
    pub primitives: Vec<PrimitiveEnum>,
    bounds: Bounds3,
}

impl PrimitiveList {
    pub fn new(primitives: Vec<PrimitiveEnum>) -> Self {
        let bounds = primitives
            .iter()
            .fold(Bounds3::EMPTY, |acc, p| acc.union(p.bounding_box()));
        PrimitiveList { primitives, bounds }
    }

    pub fn push(&mut self, primitive: PrimitiveEnum) {
        self.bounds = self.bounds.union(primitive.bounding_box());
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn bounding_box(&self) -> Bounds3 {
        self.bounds
    }

    /// True as soon as any member occludes the ray.
    pub fn has_intersection(&self, r: &Ray) -> bool {
        self.primitives
            .iter()
            .any(|prim| prim.bounding_box().intersects(r) && prim.has_intersection(r))
    }

    pub fn intersect(&self, r: &mut Ray) -> Option<Intersection<'_>> {
        let mut nearest = None;
        for prim in self.primitives.iter() {
            if !prim.bounding_box().intersects(r) {
                continue;
            }
            if let Some(isect) = prim.intersect(r) {
                nearest = Some(isect);
            }
        }
        nearest
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{MaterialId, Mesh, Sphere};
    use crate::math::{Point3, Vec3};

    fn scene() -> PrimitiveList {
        let wall = Mesh::new(
            vec![
                Point3::new(-10.0, -10.0, 20.0),
                Point3::new(10.0, -10.0, 20.0),
                Point3::new(10.0, 10.0, 20.0),
                Point3::new(-10.0, 10.0, 20.0),
            ],
            vec![-Vec3::Z; 4],
            vec![[0, 1, 2], [0, 2, 3]],
            MaterialId(2),
        );
        let mut list = PrimitiveList::new(vec![
            PrimitiveEnum::Sphere(Sphere::new(1.0, Point3::new(0.0, 0.0, 10.0), MaterialId(1))),
            PrimitiveEnum::Sphere(Sphere::new(1.0, Point3::new(0.0, 0.0, 5.0), MaterialId(0))),
        ]);
        for triangle in wall.triangles() {
            list.push(triangle.into());
        }
        list
    }

    #[test]
    fn test_closest_hit_regardless_of_order() {
        let list = scene();
        assert!(list.len() == 4);
        let mut ray = Ray::new(Point3::ORIGIN, Vec3::Z);
        let isect = list.intersect(&mut ray).expect("expected a hit");
        assert!(isect.time == 4.0, "{}", isect.time);
        assert!(isect.material_id == MaterialId(0));
        if let PrimitiveEnum::Sphere(inner) = &list.primitives[1] {
            assert!(isect.is_from(inner));
        }
        assert!(ray.tmax == 4.0);
    }

    #[test]
    fn test_falls_through_to_wall() {
        let list = scene();
        let mut ray = Ray::new(Point3::new(5.0, -5.0, 0.0), Vec3::Z);
        let isect = list.intersect(&mut ray).expect("expected the wall");
        assert!((isect.time - 20.0).abs() < 0.0001, "{}", isect.time);
        assert!(isect.material_id == MaterialId(2));
        assert!((isect.normal + Vec3::Z).norm() < 0.0001, "{:?}", isect.normal);
        assert!(ray.tmax == isect.time);
    }

    #[test]
    fn test_occlusion_and_miss() {
        let list = scene();
        let shadow = Ray::new_with_interval(Point3::ORIGIN, Vec3::Z, 0.0, 3.0);
        assert!(!list.has_intersection(&shadow));
        assert!(list.has_intersection(&shadow.with_tmax(4.5)));

        let mut away = Ray::new(Point3::ORIGIN, -Vec3::Z);
        assert!(!list.has_intersection(&away));
        assert!(list.intersect(&mut away).is_none());
        assert!(away.tmax == f32::INFINITY);
    }

    #[test]
    fn test_bounds_cover_members() {
        let list = scene();
        let bounds = list.bounding_box();
        assert!(bounds.min == Point3::new(-10.0, -10.0, 4.0));
        assert!(bounds.max == Point3::new(10.0, 10.0, 20.0));
        assert!(PrimitiveList::default().bounding_box().is_empty());
    }
}
