use super::Vec3;
use std::f32::consts::PI;

#[derive(Debug)]
pub struct Sample2D {
    pub x: f32,
    pub y: f32,
}

impl Sample2D {
    pub fn new(x: f32, y: f32) -> Self {
        debug_assert!(x < 1.0 && x >= 0.0);
        debug_assert!(y < 1.0 && y >= 0.0);

        Sample2D { x, y }
    }
    pub fn new_random_sample() -> Self {
        Sample2D::new(rand::random(), rand::random())
    }
}

pub fn random_on_unit_sphere(r: Sample2D) -> Vec3 {
    let Sample2D { x, y } = r;

    let phi = x * 2.0 * PI;
    let z = y * 2.0 - 1.0;
    let r = (1.0 - z * z).sqrt();

    let (s, c) = phi.sin_cos();

    Vec3::new(r * c, r * s, z)
}
