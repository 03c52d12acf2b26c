use serde::Serialize;

use crate::content::{LayerCatalog, TissueLayer};

/// Layers shown as legend chips
pub const LEGEND_SIZE: usize = 4;

/// Stem cross-section with a single focused layer
#[derive(Debug, Clone)]
pub struct CrossSection {
    catalog: LayerCatalog,
    active: Option<usize>,
}

impl CrossSection {
    pub fn new(catalog: LayerCatalog) -> Self {
        Self { catalog, active: None }
    }

    pub fn layers(&self) -> &[TissueLayer] {
        self.catalog.layers()
    }

    /// Focus a layer. Unknown ids are ignored.
    pub fn enter(&mut self, id: &str) -> bool {
        match self.catalog.position(id) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn leave(&mut self) {
        self.active = None;
    }

    /// Toggle focus on a layer. Unknown ids are ignored.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(index) = self.catalog.position(id) else {
            return false;
        };
        self.active = if self.active == Some(index) { None } else { Some(index) };
        log::debug!("Diagram focus: {:?}", self.active_id());
        true
    }

    pub fn active(&self) -> Option<&TissueLayer> {
        self.active.and_then(|i| self.catalog.layers().get(i))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active().map(|l| l.id.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Topmost layer under a point in unit coordinates
    pub fn layer_at(&self, x: f32, y: f32) -> Option<&TissueLayer> {
        self.catalog.layers().iter().rev().find(|l| l.rect.contains(x, y))
    }

    pub fn legend(&self) -> impl Iterator<Item = &TissueLayer> {
        self.catalog.layers().iter().take(LEGEND_SIZE)
    }

    pub fn view(&self) -> DiagramView<'_> {
        DiagramView {
            layers: self
                .layers()
                .iter()
                .map(|layer| LayerView {
                    id: &layer.id,
                    name: &layer.name,
                    color: layer.color.as_str(),
                    active: self.is_active(&layer.id),
                })
                .collect(),
            legend: self
                .legend()
                .map(|layer| LegendChip {
                    id: &layer.id,
                    label: layer.short_name(),
                    color: layer.color.as_str(),
                })
                .collect(),
            active: self.active(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LayerView<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub color: &'a str,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub struct LegendChip<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub color: &'a str,
}

#[derive(Debug, Serialize)]
pub struct DiagramView<'a> {
    pub layers: Vec<LayerView<'a>>,
    pub legend: Vec<LegendChip<'a>>,
    /// Full record of the focused layer for the info panel
    pub active: Option<&'a TissueLayer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagram() -> CrossSection {
        CrossSection::new(LayerCatalog::builtin().unwrap())
    }

    #[test]
    fn test_click_toggles() {
        let mut d = diagram();
        assert!(d.click("xylem"));
        assert_eq!(d.active_id(), Some("xylem"));
        d.click("xylem");
        assert_eq!(d.active_id(), None);
        d.click("xylem");
        d.click("pith");
        assert_eq!(d.active_id(), Some("pith"));
    }

    #[test]
    fn test_enter_and_leave() {
        let mut d = diagram();
        d.enter("cortex");
        assert!(d.is_active("cortex"));
        d.enter("phloem");
        assert!(d.is_active("phloem"));
        d.leave();
        assert!(d.active().is_none());
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut d = diagram();
        d.click("cortex");
        assert!(!d.enter("bark"));
        assert!(!d.click("bark"));
        assert_eq!(d.active_id(), Some("cortex"));
    }

    #[test]
    fn test_layer_at() {
        let d = diagram();
        assert_eq!(d.layer_at(0.5, 0.05).map(|l| l.id.as_str()), Some("epidermis"));
        assert_eq!(d.layer_at(0.2, 0.5).map(|l| l.id.as_str()), Some("phloem"));
        assert_eq!(d.layer_at(0.7, 0.5).map(|l| l.id.as_str()), Some("xylem"));
        assert_eq!(d.layer_at(0.5, 0.5), None);
        assert_eq!(d.layer_at(0.5, 0.95).map(|l| l.id.as_str()), Some("endodermis"));
    }

    #[test]
    fn test_legend_first_four() {
        let d = diagram();
        let labels: Vec<_> = d.legend().map(|l| l.short_name()).collect();
        assert_eq!(labels, ["Epidermis", "Cortex", "Phloem", "Xylem"]);
    }

    #[test]
    fn test_view_marks_active() {
        let mut d = diagram();
        d.click("pith");
        let json = serde_json::to_value(d.view()).unwrap();
        assert_eq!(json["layers"][4]["active"], true);
        assert_eq!(json["layers"][0]["active"], false);
        assert_eq!(json["active"]["id"], "pith");
        assert_eq!(json["legend"].as_array().unwrap().len(), 4);
    }
}
