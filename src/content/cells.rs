use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::HexColor;
use crate::error::{ContentError, Result};

const CELL_TYPES_YAML: &str = include_str!("../../content/cell_types.yaml");

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Parenchyma,
    Collenchyma,
    Sclerenchyma,
    Xylem,
    Phloem,
}

impl CellType {
    pub const ALL: [CellType; 5] = [
        CellType::Parenchyma,
        CellType::Collenchyma,
        CellType::Sclerenchyma,
        CellType::Xylem,
        CellType::Phloem,
    ];

    /// The three ground-tissue types, in draw-table order
    pub const GROUND: [CellType; 3] = [CellType::Parenchyma, CellType::Collenchyma, CellType::Sclerenchyma];

    pub fn as_str(self) -> &'static str {
        match self {
            CellType::Parenchyma => "parenchyma",
            CellType::Collenchyma => "collenchyma",
            CellType::Sclerenchyma => "sclerenchyma",
            CellType::Xylem => "xylem",
            CellType::Phloem => "phloem",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        CellType::ALL.into_iter().find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellTypeInfo {
    pub label: String,
    pub description: String,
    pub color: HexColor,
}

#[derive(Debug, Clone)]
pub struct CellTypeCatalog {
    types: BTreeMap<CellType, CellTypeInfo>,
}

impl CellTypeCatalog {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let types: BTreeMap<CellType, CellTypeInfo> = serde_yaml::from_str(yaml)?;
        if let Some(missing) = CellType::ALL.into_iter().find(|t| !types.contains_key(t)) {
            return Err(ContentError::MissingCellType(missing));
        }
        Ok(Self { types })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_yaml(CELL_TYPES_YAML)
    }

    pub fn get(&self, cell_type: CellType) -> &CellTypeInfo {
        &self.types[&cell_type]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CellType, &CellTypeInfo)> {
        self.types.iter().map(|(t, info)| (*t, info))
    }
}
