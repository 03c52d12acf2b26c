//! Authored page content: quiz questions, tree part overlays, stem layers
//! and cell types. Embedded YAML, parsed and validated on load.

pub mod hex;
pub mod parts;
pub mod questions;
pub mod layers;
pub mod cells;

pub use hex::HexColor;
pub use parts::{PartCatalog, PartInfo, TreePart};
pub use questions::{Question, QuestionBank, OPTION_COUNT};
pub use layers::{LayerCatalog, LayerRect, TissueLayer};
pub use cells::{CellType, CellTypeCatalog, CellTypeInfo};
