//! Grid of typed plant cells with a type filter and breathing animation.

use serde::Serialize;

use crate::animation::pulse_opacity;
use crate::content::{CellType, CellTypeCatalog};
use crate::math::Seed;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 8;

const COLUMN_PITCH: f32 = 100.0 / COLUMNS as f32;
const ROW_PITCH: f32 = 16.67;
const JITTER: f32 = 1.0;
const MIN_SIZE: f32 = 10.0;
const SIZE_RANGE: f32 = 2.0;
/// Cells are drawn taller than wide
const ASPECT: f32 = 1.33;
const MAX_DELAY: f32 = 2.0;

pub const PULSE_PERIOD: f32 = 3.0;
const PULSE_DEPTH: f32 = 0.5;
const DIMMED_OPACITY: f32 = 0.2;
const FOCUS_SCALE: f32 = 1.1;

const TYPE_SALT: u64 = 0;
const X_SALT: u64 = 1;
const Y_SALT: u64 = 2;
const SIZE_SALT: u64 = 3;
const DELAY_SALT: u64 = 4;

/// One cell, positioned in percent of the field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cell {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub cell_type: CellType,
    /// Seconds before the pulse starts
    pub delay: f32,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.id / COLUMNS
    }

    pub fn column(&self) -> usize {
        self.id % COLUMNS
    }

    pub fn height(&self) -> f32 {
        self.size * ASPECT
    }
}

fn cell_type_for(row: usize, col: usize, r: f32) -> CellType {
    if col < 2 {
        CellType::Phloem
    } else if col >= COLUMNS - 2 {
        CellType::Xylem
    } else if row < 2 {
        if r < 0.5 { CellType::Parenchyma } else { CellType::Collenchyma }
    } else if row >= ROWS - 2 {
        if r < 0.5 { CellType::Parenchyma } else { CellType::Sclerenchyma }
    } else {
        let pick = ((r * 3.0) as usize).min(CellType::GROUND.len() - 1);
        CellType::GROUND[pick]
    }
}

/// Lay out the full grid for a seed
pub fn generate_cells(seed: u64) -> Vec<Cell> {
    let base = Seed::new(seed);
    (0..ROWS * COLUMNS)
        .map(|id| {
            let key = base.mix(id as u64);
            let (row, col) = (id / COLUMNS, id % COLUMNS);
            let jitter = |salt: u64| (key.mix(salt).unit() * 2.0 - 1.0) * JITTER;
            Cell {
                id,
                x: col as f32 * COLUMN_PITCH + jitter(X_SALT),
                y: row as f32 * ROW_PITCH + jitter(Y_SALT),
                size: MIN_SIZE + key.mix(SIZE_SALT).unit() * SIZE_RANGE,
                cell_type: cell_type_for(row, col, key.mix(TYPE_SALT).unit()),
                delay: key.mix(DELAY_SALT).unit() * MAX_DELAY,
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct CellField {
    cells: Vec<Cell>,
    catalog: CellTypeCatalog,
    active: Option<CellType>,
    animating: bool,
    elapsed: f32,
}

impl CellField {
    pub fn new(catalog: CellTypeCatalog, seed: u64) -> Self {
        Self {
            cells: generate_cells(seed),
            catalog,
            active: None,
            animating: true,
            elapsed: 0.0,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn catalog(&self) -> &CellTypeCatalog {
        &self.catalog
    }

    pub fn active(&self) -> Option<CellType> {
        self.active
    }

    /// Toggle the type filter
    pub fn select(&mut self, cell_type: CellType) {
        self.active = if self.active == Some(cell_type) { None } else { Some(cell_type) };
        log::debug!("Cell filter: {:?}", self.active);
    }

    pub fn hover(&mut self, cell_type: CellType) {
        self.active = Some(cell_type);
    }

    pub fn leave(&mut self) {
        self.active = None;
    }

    pub fn is_highlighted(&self, cell: &Cell) -> bool {
        self.active.map_or(true, |t| t == cell.cell_type)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.animating = !self.animating;
        self.animating
    }

    pub fn tick(&mut self, dt: f32) {
        if self.animating {
            self.elapsed += dt.max(0.0);
        }
    }

    pub fn opacity(&self, cell: &Cell) -> f32 {
        if !self.is_highlighted(cell) {
            return DIMMED_OPACITY;
        }
        if self.animating {
            pulse_opacity(self.elapsed, cell.delay, PULSE_PERIOD, PULSE_DEPTH)
        } else {
            1.0
        }
    }

    pub fn scale(&self, cell: &Cell) -> f32 {
        if self.active == Some(cell.cell_type) {
            FOCUS_SCALE
        } else {
            1.0
        }
    }

    pub fn view(&self) -> CellFieldView<'_> {
        CellFieldView {
            cells: self
                .cells
                .iter()
                .map(|cell| CellView {
                    cell: *cell,
                    height: cell.height(),
                    color: self.catalog.get(cell.cell_type).color.as_str(),
                    opacity: self.opacity(cell),
                    scale: self.scale(cell),
                })
                .collect(),
            legend: self
                .catalog
                .iter()
                .map(|(cell_type, info)| CellLegendChip {
                    cell_type,
                    label: &info.label,
                    color: info.color.as_str(),
                    active: self.active == Some(cell_type),
                })
                .collect(),
            active: self.active,
            active_label: self.active.map(|t| self.catalog.get(t).label.as_str()),
            active_description: self.active.map(|t| self.catalog.get(t).description.as_str()),
            animating: self.animating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CellView<'a> {
    #[serde(flatten)]
    pub cell: Cell,
    pub height: f32,
    pub color: &'a str,
    pub opacity: f32,
    pub scale: f32,
}

/// Filter chip for one cell type
#[derive(Debug, Serialize)]
pub struct CellLegendChip<'a> {
    #[serde(rename = "type")]
    pub cell_type: CellType,
    pub label: &'a str,
    pub color: &'a str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct CellFieldView<'a> {
    pub cells: Vec<CellView<'a>>,
    pub legend: Vec<CellLegendChip<'a>>,
    pub active: Option<CellType>,
    pub active_label: Option<&'a str>,
    pub active_description: Option<&'a str>,
    pub animating: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> CellField {
        CellField::new(CellTypeCatalog::builtin().unwrap(), 7)
    }

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(generate_cells(11), generate_cells(11));
        assert_ne!(generate_cells(11), generate_cells(12));
    }

    #[test]
    fn test_grid_rules() {
        for seed in 0..20 {
            let cells = generate_cells(seed);
            assert_eq!(cells.len(), 48);
            for cell in &cells {
                let (row, col) = (cell.row(), cell.column());
                match col {
                    0 | 1 => assert_eq!(cell.cell_type, CellType::Phloem),
                    6 | 7 => assert_eq!(cell.cell_type, CellType::Xylem),
                    _ if row < 2 => assert!(matches!(
                        cell.cell_type,
                        CellType::Parenchyma | CellType::Collenchyma
                    )),
                    _ if row > 3 => assert!(matches!(
                        cell.cell_type,
                        CellType::Parenchyma | CellType::Sclerenchyma
                    )),
                    _ => assert!(CellType::GROUND.contains(&cell.cell_type)),
                }
            }
        }
    }

    #[test]
    fn test_geometry_ranges() {
        for cell in generate_cells(3) {
            let x0 = cell.column() as f32 * 12.5;
            let y0 = cell.row() as f32 * 16.67;
            assert!((cell.x - x0).abs() <= 1.0 + 1e-4);
            assert!((cell.y - y0).abs() <= 1.0 + 1e-4);
            assert!(cell.size >= 10.0 && cell.size <= 12.0 + 1e-4);
            assert!(cell.delay >= 0.0 && cell.delay <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn test_filter_toggles_and_hover() {
        let mut f = field();
        f.select(CellType::Xylem);
        assert_eq!(f.active(), Some(CellType::Xylem));
        f.select(CellType::Xylem);
        assert_eq!(f.active(), None);
        f.hover(CellType::Phloem);
        assert_eq!(f.active(), Some(CellType::Phloem));
        f.leave();
        assert_eq!(f.active(), None);
    }

    #[test]
    fn test_highlight_and_dimming() {
        let mut f = field();
        let cells = f.cells().to_vec();
        assert!(cells.iter().all(|c| f.is_highlighted(c)));

        f.select(CellType::Phloem);
        let phloem = cells.iter().find(|c| c.cell_type == CellType::Phloem).unwrap();
        let xylem = cells.iter().find(|c| c.cell_type == CellType::Xylem).unwrap();
        assert!(f.is_highlighted(phloem));
        assert!(!f.is_highlighted(xylem));
        assert_eq!(f.opacity(xylem), 0.2);
        assert_eq!(f.scale(phloem), 1.1);
        assert_eq!(f.scale(xylem), 1.0);
    }

    #[test]
    fn test_animation_toggle_freezes_pulse() {
        let mut f = field();
        let cell = f.cells()[0];
        f.tick(cell.delay + 1.5);
        assert!(f.opacity(&cell) < 0.6);
        assert!(!f.toggle_animation());
        assert_eq!(f.opacity(&cell), 1.0);
        f.tick(10.0);
        assert!(f.toggle_animation());
        assert!(f.opacity(&cell) < 0.6);
    }

    #[test]
    fn test_view_json() {
        let mut f = field();
        f.select(CellType::Xylem);
        let json = serde_json::to_value(f.view()).unwrap();
        assert_eq!(json["cells"].as_array().unwrap().len(), 48);
        assert_eq!(json["active"], "xylem");
        assert_eq!(json["active_label"], "Xylem");
        assert!(json["cells"][0]["cell_type"].is_string());
    }

    #[test]
    fn test_view_legend_marks_active_type() {
        let mut f = field();
        f.select(CellType::Phloem);
        let json = serde_json::to_value(f.view()).unwrap();
        let legend = json["legend"].as_array().unwrap();
        assert_eq!(legend.len(), CellType::ALL.len());

        let phloem = legend.iter().find(|chip| chip["type"] == "phloem").unwrap();
        assert_eq!(phloem["label"], "Phloem");
        assert_eq!(phloem["color"], "#F4B740");
        assert_eq!(phloem["active"], true);
        let active = legend.iter().filter(|chip| chip["active"] == true).count();
        assert_eq!(active, 1);

        f.select(CellType::Phloem);
        let json = serde_json::to_value(f.view()).unwrap();
        assert!(json["legend"].as_array().unwrap().iter().all(|chip| chip["active"] == false));
    }
}
