use crate::error::SceneError;
use crate::geometry::{MaterialId, Triangle};
use crate::math::{Point3, Vec3};

/// Indexed vertex data that triangles are cut from. Owns the positions and
/// normals; each `Triangle` copies the three vertices it needs.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub positions: Vec<Point3>,
    pub normals: Vec<Vec3>,
    pub indices: Vec<[usize; 3]>,
    pub material_id: MaterialId,
}

impl Mesh {
    pub fn new(
        positions: Vec<Point3>,
        normals: Vec<Vec3>,
        indices: Vec<[usize; 3]>,
        material_id: MaterialId,
    ) -> Self {
        Mesh {
            positions,
            normals,
            indices,
            material_id,
        }
    }

    /// Builds a mesh with per-face normals. Vertices are duplicated per face
    /// so that shared vertices don't blend the normals of adjacent faces.
    pub fn with_flat_normals(
        positions: &[Point3],
        indices: &[[usize; 3]],
        material_id: MaterialId,
    ) -> Result<Self, SceneError> {
        check_indices(indices, positions.len())?;
        let mut flat_positions = Vec::with_capacity(indices.len() * 3);
        let mut flat_normals = Vec::with_capacity(indices.len() * 3);
        let mut flat_indices = Vec::with_capacity(indices.len());
        for [a, b, c] in indices.iter().copied() {
            let (p1, p2, p3) = (positions[a], positions[b], positions[c]);
            let face_normal = (p2 - p1).cross(p3 - p1);
            // degenerate faces get a zero normal and are never hit anyway
            let normal = if face_normal.norm_squared() > 0.0 {
                face_normal.normalized()
            } else {
                Vec3::ZERO
            };
            let base = flat_positions.len();
            flat_positions.extend_from_slice(&[p1, p2, p3]);
            flat_normals.extend_from_slice(&[normal, normal, normal]);
            flat_indices.push([base, base + 1, base + 2]);
        }
        Ok(Mesh::new(
            flat_positions,
            flat_normals,
            flat_indices,
            material_id,
        ))
    }

    pub fn num_faces(&self) -> usize {
        self.indices.len()
    }

    /// Checks the invariants `triangle` relies on.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.positions.len() != self.normals.len() {
            return Err(SceneError::NormalCountMismatch {
                positions: self.positions.len(),
                normals: self.normals.len(),
            });
        }
        check_indices(&self.indices, self.positions.len())
    }

    pub fn triangle(&self, face: usize) -> Triangle {
        let [v1, v2, v3] = self.indices[face];
        Triangle::from_mesh(self, v1, v2, v3)
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        (0..self.indices.len()).map(move |face| self.triangle(face))
    }
}

fn check_indices(indices: &[[usize; 3]], len: usize) -> Result<(), SceneError> {
    for (face, vertices) in indices.iter().enumerate() {
        if let Some(&index) = vertices.iter().find(|&&index| index >= len) {
            return Err(SceneError::IndexOutOfRange { face, index, len });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Primitive;
    use crate::math::Ray;

    fn quad() -> Mesh {
        Mesh::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![Vec3::Z, Vec3::Z, Vec3::Z, Vec3::Z],
            vec![[0, 1, 2], [0, 2, 3]],
            MaterialId(2),
        )
    }

    #[test]
    fn test_triangles_copy_vertices() {
        let mesh = quad();
        assert!(mesh.validate().is_ok());
        let triangles = mesh.triangles().collect::<Vec<_>>();
        assert!(triangles.len() == 2);
        let second = triangles[1];
        assert!(second.p1 == mesh.positions[0]);
        assert!(second.p2 == mesh.positions[2]);
        assert!(second.p3 == mesh.positions[3]);
        assert!(second.n2 == mesh.normals[2]);
        assert!(second.material_id() == MaterialId(2));
        assert!(second.bounding_box().max == Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_quad_covers_both_halves() {
        let mesh = quad();
        for &(x, y) in &[(0.75, 0.25), (0.25, 0.75)] {
            let ray = Ray::new(Point3::new(x, y, 1.0), -Vec3::Z);
            let hits = mesh.triangles().filter(|t| t.has_intersection(&ray)).count();
            assert!(hits == 1, "({}, {}) hit {} faces", x, y, hits);
        }
    }

    #[test]
    fn test_validate_rejects_bad_indices() {
        let mut mesh = quad();
        mesh.indices.push([0, 4, 1]);
        match mesh.validate() {
            Err(SceneError::IndexOutOfRange { face, index, len }) => {
                assert!(face == 2 && index == 4 && len == 4);
            }
            other => panic!("unexpected {:?}", other),
        }

        let mut mesh = quad();
        mesh.normals.pop();
        assert!(matches!(
            mesh.validate(),
            Err(SceneError::NormalCountMismatch {
                positions: 4,
                normals: 3
            })
        ));
    }

    #[test]
    fn test_flat_normals() {
        let source = quad();
        let mesh = Mesh::with_flat_normals(&source.positions, &source.indices, MaterialId(0))
            .expect("quad indices are in range");
        assert!(mesh.validate().is_ok());
        assert!(mesh.positions.len() == 6 && mesh.num_faces() == 2);
        for n in mesh.normals.iter() {
            assert!(*n == Vec3::Z, "{:?}", n);
        }
    }

    #[test]
    fn test_flat_normals_rejects_bad_indices() {
        let source = quad();
        let result = Mesh::with_flat_normals(&source.positions, &[[0, 1, 9]], MaterialId(0));
        assert!(matches!(
            result,
            Err(SceneError::IndexOutOfRange {
                face: 0,
                index: 9,
                len: 4
            })
        ));
    }
}
