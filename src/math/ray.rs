use super::{Point3, Vec3};
use std::f32::INFINITY;

/// A query ray with a closed valid-parameter interval `[tmin, tmax]`.
///
/// `tmax` doubles as the closest-hit-so-far accumulator: every successful
/// `Primitive::intersect` shrinks it to the accepted hit time, so later
/// primitives can only report nearer hits.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vec3,
    pub tmin: f32,
    pub tmax: f32,
}

impl Ray {
    pub const fn new(origin: Point3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction,
            tmin: 0.0,
            tmax: INFINITY,
        }
    }

    pub fn new_with_interval(origin: Point3, direction: Vec3, tmin: f32, tmax: f32) -> Self {
        debug_assert!(tmin <= tmax, "{} > {}", tmin, tmax);
        Ray {
            origin,
            direction,
            tmin,
            tmax,
        }
    }
    pub fn with_tmax(mut self, tmax: f32) -> Self {
        debug_assert!(self.tmin <= tmax);
        self.tmax = tmax;
        self
    }
    pub fn point_at_parameter(&self, time: f32) -> Point3 {
        self.origin + self.direction * time
    }
    #[inline(always)]
    pub fn contains(&self, time: f32) -> bool {
        time >= self.tmin && time <= self.tmax
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Point3::default(), Vec3::Z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_interval_is_closed() {
        let ray = Ray::new_with_interval(Point3::ORIGIN, Vec3::Z, 1.0, 2.0);
        assert!(ray.contains(1.0) && ray.contains(2.0) && ray.contains(1.5));
        assert!(!ray.contains(0.999) && !ray.contains(2.001));
        assert!(!ray.contains(f32::NAN));
    }

    #[test]
    fn test_point_at_parameter() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 2.0));
        assert!(ray.point_at_parameter(2.0) == Point3::new(0.0, 0.0, -1.0));
        assert!(ray.with_tmax(3.0).tmax == 3.0);
    }
}
