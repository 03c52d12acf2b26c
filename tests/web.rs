//! Browser checks for the exported widgets. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use plant_tissue_explorer::{CellFieldWidget, DiagramWidget, QuizWidget};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn quiz_widget_reports_view() {
    let mut quiz = QuizWidget::new().unwrap();
    assert!(quiz.answer(0).is_some());
    assert!(quiz.answer(0).is_none());
    let view: serde_json::Value = serde_json::from_str(&quiz.view_json().unwrap()).unwrap();
    assert_eq!(view["question_number"], 1);
    assert!(view["explanation"].is_string());
}

#[wasm_bindgen_test]
fn diagram_widget_toggles() {
    let mut diagram = DiagramWidget::new().unwrap();
    assert!(diagram.click("phloem"));
    assert_eq!(diagram.active_layer().as_deref(), Some("phloem"));
    diagram.click("phloem");
    assert_eq!(diagram.active_layer(), None);
    assert!(!diagram.click("bark"));
}

#[wasm_bindgen_test]
fn cell_widget_filters() {
    let mut cells = CellFieldWidget::new(5).unwrap();
    assert!(cells.select("Xylem"));
    assert_eq!(cells.active_type().as_deref(), Some("xylem"));
    assert!(!cells.hover("cambium"));
    assert!(!cells.toggle_animation());
}
