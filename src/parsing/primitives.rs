use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::SceneError,
    geometry::{MaterialId, Mesh, PrimitiveEnum, Sphere},
    math::{Point3, Vec3},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PrimitiveData {
    Sphere {
        origin: [f32; 3],
        radius: f32,
        material: String,
    },
    Mesh {
        positions: Vec<[f32; 3]>,
        #[serde(default)]
        normals: Option<Vec<[f32; 3]>>,
        indices: Vec<[usize; 3]>,
        material: String,
    },
}

fn resolve(
    material_mapping: &HashMap<String, MaterialId>,
    material: &str,
) -> Result<MaterialId, SceneError> {
    material_mapping
        .get(material)
        .copied()
        .ok_or_else(|| SceneError::UnknownMaterial(material.to_owned()))
}

// a zero or non-finite normal would normalize to NaN and poison every hit
fn unit_normal(index: usize, n: Vec3) -> Result<Vec3, SceneError> {
    if n.norm_squared() > 0.0 && n.is_finite() {
        Ok(n.normalized())
    } else {
        Err(SceneError::DegenerateNormal { index })
    }
}

impl PrimitiveData {
    pub fn transform(
        self,
        material_mapping: &HashMap<String, MaterialId>,
    ) -> Result<Vec<PrimitiveEnum>, SceneError> {
        match self {
            Self::Sphere {
                origin,
                radius,
                material,
            } => {
                if !(radius > 0.0 && radius.is_finite()) {
                    return Err(SceneError::DegenerateSphere(radius));
                }
                Ok(vec![PrimitiveEnum::Sphere(Sphere::new(
                    radius,
                    Point3::from(origin),
                    resolve(material_mapping, &material)?,
                ))])
            }
            Self::Mesh {
                positions,
                normals,
                indices,
                material,
            } => {
                let material_id = resolve(material_mapping, &material)?;
                let positions: Vec<Point3> = positions.into_iter().map(Point3::from).collect();
                let mesh = match normals {
                    Some(normals) => Mesh::new(
                        positions,
                        normals
                            .into_iter()
                            .enumerate()
                            .map(|(index, n)| unit_normal(index, Vec3::from(n)))
                            .collect::<Result<Vec<_>, _>>()?,
                        indices,
                        material_id,
                    ),
                    None => {
                        debug!("synthesizing flat normals for {} faces", indices.len());
                        Mesh::with_flat_normals(&positions, &indices, material_id)?
                    }
                };
                mesh.validate()?;
                Ok(mesh.triangles().map(PrimitiveEnum::Triangle).collect())
            }
        }
    }
}
