use std::fmt;

use crate::math::{Bounds3, Point3, Ray, Vec3};

mod list;
mod mesh;
mod sphere;
mod triangle;

pub use list::PrimitiveList;
pub use mesh::Mesh;
pub use sphere::Sphere;
pub use triangle::{Triangle, DETERMINANT_EPSILON};

/// Opaque handle to shading data owned by the material collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct MaterialId(pub usize);

/// A successful hit. Borrows the primitive that produced it.
#[derive(Copy, Clone)]
pub struct Intersection<'a> {
    pub time: f32,
    pub point: Point3,
    pub normal: Vec3,
    pub primitive: &'a dyn Primitive,
    pub material_id: MaterialId,
}

impl<'a> Intersection<'a> {
    pub fn new(
        time: f32,
        point: Point3,
        normal: Vec3,
        primitive: &'a dyn Primitive,
        material_id: MaterialId,
    ) -> Self {
        Intersection {
            time,
            point,
            normal,
            primitive,
            material_id,
        }
    }

    /// True if this hit was produced by `other`.
    pub fn is_from(&self, other: &dyn Primitive) -> bool {
        std::ptr::eq(
            self.primitive as *const _ as *const u8,
            other as *const _ as *const u8,
        )
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("time", &self.time)
            .field("point", &self.point)
            .field("normal", &self.normal)
            .field("primitive", &(self.primitive as *const _ as *const u8))
            .field("material_id", &self.material_id)
            .finish()
    }
}

/// The capability every intersectable shape shares.
///
/// `has_intersection` is the cheap occlusion query and never mutates the ray.
/// `intersect` returns the nearest hit inside `[r.tmin, r.tmax]` and shrinks
/// `r.tmax` to it; on a miss it returns `None` and leaves the ray untouched.
pub trait Primitive: Send + Sync {
    fn bounding_box(&self) -> Bounds3;
    fn has_intersection(&self, r: &Ray) -> bool;
    fn intersect(&self, r: &mut Ray) -> Option<Intersection<'_>>;
    fn material_id(&self) -> MaterialId;
}

#[derive(Clone, Debug, PartialEq)]
pub enum PrimitiveEnum {
    Sphere(Sphere),
    Triangle(Triangle),
}

impl Primitive for PrimitiveEnum {
    fn bounding_box(&self) -> Bounds3 {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.bounding_box(),
            PrimitiveEnum::Triangle(inner) => inner.bounding_box(),
        }
    }
    fn has_intersection(&self, r: &Ray) -> bool {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.has_intersection(r),
            PrimitiveEnum::Triangle(inner) => inner.has_intersection(r),
        }
    }
    fn intersect(&self, r: &mut Ray) -> Option<Intersection<'_>> {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.intersect(r),
            PrimitiveEnum::Triangle(inner) => inner.intersect(r),
        }
    }
    fn material_id(&self) -> MaterialId {
        match self {
            PrimitiveEnum::Sphere(inner) => inner.material_id(),
            PrimitiveEnum::Triangle(inner) => inner.material_id(),
        }
    }
}

impl From<Sphere> for PrimitiveEnum {
    fn from(sphere: Sphere) -> Self {
        PrimitiveEnum::Sphere(sphere)
    }
}

impl From<Triangle> for PrimitiveEnum {
    fn from(triangle: Triangle) -> Self {
        PrimitiveEnum::Triangle(triangle)
    }
}
