mod primitives;

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use log::info;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use primitives::*;

use crate::{
    camera::Camera,
    error::SceneError,
    geometry::{MaterialId, PrimitiveList},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraData {
    pub look_from: [f32; 3],
    pub look_at: [f32; 3],
    pub up: [f32; 3],
    pub vfov: f32,
    pub aspect_ratio: f32,
}

impl Default for CameraData {
    fn default() -> Self {
        CameraData {
            look_from: [0.0, 0.0, -5.0],
            look_at: [0.0, 0.0, 0.0],
            up: [0.0, 1.0, 0.0],
            vfov: 45.0,
            aspect_ratio: 1.0,
        }
    }
}

impl From<CameraData> for Camera {
    fn from(data: CameraData) -> Self {
        Camera::new(
            data.look_from.into(),
            data.look_at.into(),
            data.up.into(),
            data.vfov,
            data.aspect_ratio,
        )
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    pub materials: Vec<String>,
    pub primitives: Vec<PrimitiveData>,
    #[serde(default)]
    pub camera: CameraData,
}

pub struct Scene {
    pub materials: Vec<String>,
    pub primitives: PrimitiveList,
    pub camera: Camera,
}

impl TryFrom<SceneData> for Scene {
    type Error = SceneError;
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let material_name_to_id: HashMap<String, MaterialId> = data
            .materials
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), MaterialId(id)))
            .collect();

        let mut primitives = PrimitiveList::default();
        for primitive in data.primitives {
            for prim in primitive.transform(&material_name_to_id)? {
                primitives.push(prim);
            }
        }
        info!(
            "loaded scene with {} materials and {} primitives",
            data.materials.len(),
            primitives.len()
        );

        Ok(Scene {
            materials: data.materials,
            primitives,
            camera: data.camera.into(),
        })
    }
}

pub fn load_json<T>(path: &Path) -> Result<T, SceneError>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path)?.read_to_string(&mut input)?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    info!("loading scene from {}", path.display());
    Scene::try_from(load_json::<SceneData>(path)?)
}
