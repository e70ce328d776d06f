use super::{Point3, Ray, Vec3};

/// Axis aligned bounding box. An empty box has `min` at +inf and `max` at -inf.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    pub const EMPTY: Bounds3 = Bounds3 {
        min: Point3::INFINITY,
        max: Point3::NEG_INFINITY,
    };

    pub fn new(a: Point3, b: Point3) -> Self {
        Bounds3 {
            min: a.min(b),
            max: a.max(b),
        }
    }
    pub fn from_point(p: Point3) -> Self {
        Bounds3 { min: p, max: p }
    }
    pub fn is_empty(&self) -> bool {
        self.min.x() > self.max.x() || self.min.y() > self.max.y() || self.min.z() > self.max.z()
    }
    pub fn expand(mut self, p: Point3) -> Self {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
        self
    }
    pub fn union(self, other: Bounds3) -> Self {
        Bounds3 {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
    pub fn contains(&self, p: Point3) -> bool {
        (0..3).all(|i| self.min.0[i] <= p.0[i] && p.0[i] <= self.max.0[i])
    }
    pub fn diagonal(&self) -> Vec3 {
        self.max - self.min
    }
    pub fn centroid(&self) -> Point3 {
        self.min + self.diagonal() / 2.0
    }

    /// Slab test against the ray's current `[tmin, tmax]`.
    pub fn intersects(&self, r: &Ray) -> bool {
        let (mut t0, mut t1) = (r.tmin, r.tmax);
        for i in 0..3 {
            let inv_d = 1.0 / r.direction.0[i];
            let mut near = (self.min.0[i] - r.origin.0[i]) * inv_d;
            let mut far = (self.max.0[i] - r.origin.0[i]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut near, &mut far);
            }
            // NaN from 0 * inf when the origin sits on a slab plane of an axis parallel ray
            if !near.is_nan() {
                t0 = t0.max(near);
            }
            if !far.is_nan() {
                t1 = t1.min(far);
            }
            if t0 > t1 {
                return false;
            }
        }
        true
    }
}

impl Default for Bounds3 {
    fn default() -> Self {
        Bounds3::EMPTY
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_expand_and_union() {
        let b = Bounds3::from_point(Point3::new(0.0, 0.0, 0.0))
            .expand(Point3::new(1.0, -1.0, 2.0))
            .expand(Point3::new(0.5, 3.0, 1.0));
        assert!(b.min == Point3::new(0.0, -1.0, 0.0), "{:?}", b);
        assert!(b.max == Point3::new(1.0, 3.0, 2.0), "{:?}", b);
        assert!(Bounds3::EMPTY.is_empty());
        assert!(Bounds3::EMPTY.union(b) == b);
        assert!(b.contains(b.centroid()));
    }

    #[test]
    fn test_slab_respects_interval() {
        let b = Bounds3::new(Point3::new(-1.0, -1.0, -1.0), Point3::new(1.0, 1.0, 1.0));
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(b.intersects(&ray));
        assert!(!b.intersects(&ray.with_tmax(3.9)));
        let miss = Ray::new(Point3::new(2.0, 0.0, -5.0), Vec3::Z);
        assert!(!b.intersects(&miss));
        let behind = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(!b.intersects(&behind));
    }
}
