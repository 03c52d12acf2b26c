use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::error::{ContentError, Result};

const LAYERS_YAML: &str = include_str!("../../content/tissue_layers.yaml");

/// Rectangle in unit diagram coordinates, anchored to the top or bottom edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerRect {
    #[serde(default)]
    pub top: Option<f32>,
    #[serde(default)]
    pub bottom: Option<f32>,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl LayerRect {
    /// Distance of the upper edge from the top of the diagram
    pub fn top_edge(&self) -> f32 {
        match (self.top, self.bottom) {
            (Some(top), _) => top,
            (None, Some(bottom)) => 1.0 - bottom - self.height,
            (None, None) => 0.0,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        let top = self.top_edge();
        x >= self.left && x < self.left + self.width && y >= top && y < top + self.height
    }
}

/// One labeled layer of the stem cross-section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TissueLayer {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: HexColor,
    pub rect: LayerRect,
}

impl TissueLayer {
    /// First word of the name, used on legend chips
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug, Deserialize)]
struct LayersInput {
    layers: Vec<TissueLayer>,
}

/// Layers in draw order (later layers sit on top)
#[derive(Debug, Clone)]
pub struct LayerCatalog {
    layers: Vec<TissueLayer>,
}

impl LayerCatalog {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let input: LayersInput = serde_yaml::from_str(yaml)?;
        if input.layers.is_empty() {
            return Err(ContentError::Empty("layer"));
        }
        let mut seen = HashSet::new();
        for layer in &input.layers {
            if !seen.insert(layer.id.as_str()) {
                return Err(ContentError::DuplicateId(layer.id.clone()));
            }
        }
        Ok(Self { layers: input.layers })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_yaml(LAYERS_YAML)
    }

    pub fn layers(&self) -> &[TissueLayer] {
        &self.layers
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_layers() {
        let catalog = LayerCatalog::builtin().unwrap();
        let ids: Vec<_> = catalog.layers().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["epidermis", "cortex", "phloem", "xylem", "pith", "endodermis"]);
        assert_eq!(catalog.layers()[0].short_name(), "Epidermis");
    }

    #[test]
    fn test_bottom_anchor() {
        let rect = LayerRect { top: None, bottom: Some(0.0), left: 0.0, width: 1.0, height: 0.15 };
        assert!((rect.top_edge() - 0.85).abs() < 0.0001);
        assert!(rect.contains(0.5, 0.9));
        assert!(!rect.contains(0.5, 0.8));
    }

    #[test]
    fn test_contains_is_half_open() {
        let rect = LayerRect { top: Some(0.4), bottom: None, left: 0.1, width: 0.35, height: 0.2 };
        assert!(rect.contains(0.1, 0.4));
        assert!(!rect.contains(0.46, 0.5));
        assert!(!rect.contains(0.2, 0.61));
    }

    #[test]
    fn test_duplicate_layer_ids() {
        let yaml = r##"
layers:
  - { id: a, name: A, description: d, color: "#000000", rect: { top: 0.0, left: 0.0, width: 1.0, height: 0.5 } }
  - { id: a, name: B, description: d, color: "#000000", rect: { top: 0.5, left: 0.0, width: 1.0, height: 0.5 } }
"##;
        assert!(matches!(LayerCatalog::from_yaml(yaml), Err(ContentError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_layers() {
        assert!(matches!(LayerCatalog::from_yaml("layers: []"), Err(ContentError::Empty("layer"))));
    }
}
