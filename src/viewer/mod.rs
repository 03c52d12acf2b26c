//! The interactive 3D tree: native explorer state and its wasm front end

mod config;
mod explorer;
mod widget;

pub use config::{CameraOverrides, ViewerConfig};
pub use explorer::{PartLegendEntry, TreeExplorer};
pub use widget::TreeViewer;
