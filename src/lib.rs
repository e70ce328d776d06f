//! Ray-primitive intersection kernel.
//!
//! Spheres and triangles share the `Primitive` capability: an occlusion
//! query, a closest-hit query that shrinks the ray's `tmax`, and a bounding
//! box for whatever acceleration structure sits above them.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod math;
pub mod parsing;

pub use error::SceneError;
pub use geometry::{
    Intersection, MaterialId, Mesh, Primitive, PrimitiveEnum, PrimitiveList, Sphere, Triangle,
};
pub use math::{Bounds3, Point3, Ray, Vec3};
