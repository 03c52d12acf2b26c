use wasm_bindgen::prelude::*;

pub mod animation;
pub mod cells;
pub mod content;
pub mod diagram;
pub mod error;
pub mod growth;
pub mod interaction;
pub mod math;
pub mod mesh;
pub mod quiz;
pub mod render;
pub mod telemetry;
pub mod viewer;

// Widgets exported to JavaScript
pub use cells::CellFieldWidget;
pub use diagram::DiagramWidget;
pub use quiz::QuizWidget;
pub use viewer::TreeViewer;

pub use error::ContentError;

/// Install the panic hook and route `log` output to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // a second init (e.g. in tests) finds the logger already set
    let _ = console_log::init_with_level(log::Level::Info);
}
