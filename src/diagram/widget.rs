use wasm_bindgen::prelude::*;

use super::section::CrossSection;
use crate::content::LayerCatalog;

#[wasm_bindgen]
pub struct DiagramWidget {
    section: CrossSection,
}

#[wasm_bindgen]
impl DiagramWidget {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DiagramWidget, JsValue> {
        let catalog = LayerCatalog::builtin()?;
        log::info!("Cross-section loaded with {} layers", catalog.layers().len());
        Ok(Self { section: CrossSection::new(catalog) })
    }

    pub fn enter(&mut self, id: &str) -> bool {
        self.section.enter(id)
    }

    pub fn leave(&mut self) {
        self.section.leave();
    }

    pub fn click(&mut self, id: &str) -> bool {
        self.section.click(id)
    }

    /// Id of the topmost layer under a unit-space point
    pub fn layer_at(&self, x: f32, y: f32) -> Option<String> {
        self.section.layer_at(x, y).map(|l| l.id.clone())
    }

    pub fn active_layer(&self) -> Option<String> {
        self.section.active_id().map(str::to_owned)
    }

    pub fn view_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.section.view()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
