//! Cell-type field widget

mod field;
mod widget;

pub use field::{generate_cells, Cell, CellField, CellFieldView, CellLegendChip, CellView, COLUMNS, PULSE_PERIOD, ROWS};
pub use widget::CellFieldWidget;
