use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::error::{ContentError, Result};

const TREE_PARTS_YAML: &str = include_str!("../../content/tree_parts.yaml");

/// Semantic tag attached to every generated tree segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreePart {
    Bark,
    Branches,
    Leaves,
    Roots,
}

impl TreePart {
    pub const ALL: [TreePart; 4] = [TreePart::Bark, TreePart::Branches, TreePart::Leaves, TreePart::Roots];

    /// Stable slot used for hover masks and vertex attributes
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TreePart::Bark => "bark",
            TreePart::Branches => "branches",
            TreePart::Leaves => "leaves",
            TreePart::Roots => "roots",
        }
    }
}

impl fmt::Display for TreePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TreePart {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self> {
        TreePart::ALL
            .into_iter()
            .find(|part| part.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ContentError::UnknownPart(s.to_string()))
    }
}

/// Overlay shown when a part is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartInfo {
    pub title: String,
    pub description: String,
    pub tissues: Vec<String>,
    pub color: HexColor,
}

/// Overlay records for all four parts
#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: BTreeMap<TreePart, PartInfo>,
}

impl PartCatalog {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let parts: BTreeMap<TreePart, PartInfo> = serde_yaml::from_str(yaml)?;
        if let Some(missing) = TreePart::ALL.into_iter().find(|p| !parts.contains_key(p)) {
            return Err(ContentError::MissingPart(missing));
        }
        Ok(Self { parts })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_yaml(TREE_PARTS_YAML)
    }

    /// Every part is present after construction, so lookup cannot miss
    pub fn get(&self, part: TreePart) -> &PartInfo {
        &self.parts[&part]
    }

    pub fn iter(&self) -> impl Iterator<Item = (TreePart, &PartInfo)> {
        self.parts.iter().map(|(part, info)| (*part, info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_all_parts() {
        let catalog = PartCatalog::builtin().unwrap();
        for part in TreePart::ALL {
            let info = catalog.get(part);
            assert!(!info.title.is_empty());
            assert_eq!(info.tissues.len(), 4);
        }
        assert_eq!(catalog.get(TreePart::Bark).color.as_str(), "#8B4513");
    }

    #[test]
    fn test_missing_part_rejected() {
        let yaml = r##"
bark:
  title: "Bark"
  description: "d"
  tissues: []
  color: "#000000"
"##;
        let err = PartCatalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ContentError::MissingPart(TreePart::Branches)));
    }

    #[test]
    fn test_bad_color_rejected() {
        let yaml = r##"
bark: { title: t, description: d, tissues: [], color: "brown" }
branches: { title: t, description: d, tissues: [], color: "#000000" }
leaves: { title: t, description: d, tissues: [], color: "#000000" }
roots: { title: t, description: d, tissues: [], color: "#000000" }
"##;
        assert!(PartCatalog::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_part_names() {
        assert_eq!("Leaves".parse::<TreePart>().unwrap(), TreePart::Leaves);
        assert_eq!(TreePart::Roots.to_string(), "roots");
        assert!("trunk".parse::<TreePart>().is_err());
        for (i, part) in TreePart::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }
}
