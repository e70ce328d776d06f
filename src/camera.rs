use crate::math::{Point3, Ray, Vec3};

/// Pinhole camera. Rays leave `origin` through a virtual screen one unit away.
#[derive(Clone, Debug)]
pub struct Camera {
    pub origin: Point3,
    pub direction: Vec3,
    pub horizontal: Vec3,
    pub vertical: Vec3,
}

impl Camera {
    pub fn new(
        look_from: Point3,
        look_at: Point3,
        up: Vec3,
        vfov: f32,
        aspect_ratio: f32,
    ) -> Camera {
        let direction = (look_at - look_from).normalized();
        let side = direction.cross(up).normalized();
        let real_up = side.cross(direction).normalized();

        let half_height = (vfov.to_radians() / 2.0).tan();
        let half_width = half_height * aspect_ratio;
        Camera {
            origin: look_from,
            direction,
            horizontal: 2.0 * half_width * side,
            vertical: 2.0 * half_height * real_up,
        }
    }

    pub fn get_ray(&self, s: f32, t: f32) -> Ray {
        // s and t range from 0 to 1, in the style of uv coordinates.
        let direction = self.direction + (s - 0.5) * self.horizontal + (t - 0.5) * self.vertical;
        Ray::new(self.origin, direction.normalized())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_center_ray_looks_at_target() {
        let camera = Camera::new(
            Point3::new(0.0, 0.0, -5.0),
            Point3::ORIGIN,
            Vec3::Y,
            45.0,
            1.0,
        );
        let ray = camera.get_ray(0.5, 0.5);
        assert!((ray.direction - Vec3::Z).norm() < 0.000001, "{:?}", ray.direction);

        // t grows along up, s grows along direction x up, which is -x when
        // looking down +z with +y up
        let up = camera.get_ray(0.5, 1.0);
        assert!(up.direction.y() > 0.1, "{:?}", up.direction);
        let side = camera.get_ray(1.0, 0.5);
        assert!(side.direction.x() < -0.1, "{:?}", side.direction);
        let other_side = camera.get_ray(0.0, 0.5);
        assert!(other_side.direction.x() > 0.1, "{:?}", other_side.direction);
    }
}
