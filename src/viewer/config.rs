use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::growth::TreeParams;
use crate::interaction::OrbitCamera;

/// Camera settings a host may change after construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOverrides {
    pub auto_rotate: Option<bool>,
    pub min_distance: Option<f32>,
    pub max_distance: Option<f32>,
}

impl CameraOverrides {
    pub fn apply(&self, camera: &mut OrbitCamera) {
        if let Some(enabled) = self.auto_rotate {
            camera.set_auto_rotate(enabled);
        }
        if self.min_distance.is_some() || self.max_distance.is_some() {
            let (min, max) = camera.distance_bounds();
            camera.set_distance_bounds(self.min_distance.unwrap_or(min), self.max_distance.unwrap_or(max));
        }
    }
}

/// Runtime configuration of the tree viewer, read from YAML:
///
/// ```yaml
/// tree:
///   seed: 42
///   root_count: 8
/// camera:
///   auto_rotate: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub tree: TreeParams,
    pub camera: CameraOverrides,
}

impl ViewerConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
