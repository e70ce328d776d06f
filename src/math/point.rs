use std::{
    f32::INFINITY,
    fmt,
    ops::{Add, Sub},
};

use nalgebra::Point3 as NPoint3;

use super::Vec3;

#[derive(Copy, Clone, PartialEq)]
pub struct Point3(pub NPoint3<f32>);

impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3(NPoint3::new(x, y, z))
    }
    pub const ZERO: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
    pub const INFINITY: Point3 = Point3::new(INFINITY, INFINITY, INFINITY);
    pub const NEG_INFINITY: Point3 = Point3::new(-INFINITY, -INFINITY, -INFINITY);
}

impl Point3 {
    pub fn x(&self) -> f32 {
        self.0.x
    }
    pub fn y(&self) -> f32 {
        self.0.y
    }
    pub fn z(&self) -> f32 {
        self.0.z
    }
    // componentwise min and max, used for growing bounding boxes
    pub fn min(&self, other: Point3) -> Point3 {
        Point3(NPoint3::from(self.0.coords.inf(&other.0.coords)))
    }
    pub fn max(&self, other: Point3) -> Point3 {
        Point3(NPoint3::from(self.0.coords.sup(&other.0.coords)))
    }
}

impl fmt::Debug for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point3")
            .field(&self.x())
            .field(&self.y())
            .field(&self.z())
            .finish()
    }
}

impl Default for Point3 {
    fn default() -> Self {
        Point3::ORIGIN
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, other: Vec3) -> Point3 {
        Point3(self.0 + other.0)
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, other: Vec3) -> Point3 {
        Point3(self.0 - other.0)
    }
}

// don't implement adding points together, only differences are meaningful
impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, other: Point3) -> Vec3 {
        Vec3(self.0 - other.0)
    }
}

impl From<[f32; 3]> for Point3 {
    fn from(other: [f32; 3]) -> Point3 {
        Point3::new(other[0], other[1], other[2])
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Point3 {
        Point3::ORIGIN + v
    }
}
