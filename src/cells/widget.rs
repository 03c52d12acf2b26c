use wasm_bindgen::prelude::*;

use super::field::CellField;
use crate::content::{CellType, CellTypeCatalog};

#[wasm_bindgen]
pub struct CellFieldWidget {
    field: CellField,
}

#[wasm_bindgen]
impl CellFieldWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<CellFieldWidget, JsValue> {
        let catalog = CellTypeCatalog::builtin()?;
        Ok(Self { field: CellField::new(catalog, seed as u64) })
    }

    /// Toggle the filter. Unknown type names are ignored.
    pub fn select(&mut self, cell_type: &str) -> bool {
        match CellType::parse(cell_type) {
            Some(t) => {
                self.field.select(t);
                true
            }
            None => false,
        }
    }

    pub fn hover(&mut self, cell_type: &str) -> bool {
        match CellType::parse(cell_type) {
            Some(t) => {
                self.field.hover(t);
                true
            }
            None => false,
        }
    }

    pub fn leave(&mut self) {
        self.field.leave();
    }

    pub fn active_type(&self) -> Option<String> {
        self.field.active().map(|t| t.as_str().to_owned())
    }

    pub fn toggle_animation(&mut self) -> bool {
        self.field.toggle_animation()
    }

    pub fn is_animating(&self) -> bool {
        self.field.is_animating()
    }

    /// Advance the pulse clock by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.field.tick(dt);
    }

    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.field.view()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
