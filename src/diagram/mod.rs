//! Labeled stem cross-section with hover and click focus

mod section;
mod widget;

pub use section::{CrossSection, DiagramView, LayerView, LegendChip, LEGEND_SIZE};
pub use widget::DiagramWidget;
