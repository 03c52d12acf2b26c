use std::str::FromStr;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use super::explorer::TreeExplorer;
use crate::content::TreePart;
use crate::growth::TreeParams;
use crate::interaction::OrbitConfig;
use crate::mesh::palette;
use crate::render::{Atmosphere, RenderPipeline};
use crate::telemetry::JsCallbackSink;

/// Radians of orbit per dragged pixel
const ORBIT_SPEED: f32 = 0.005;

/// Interactive 3D tree bound to a canvas
#[wasm_bindgen]
pub struct TreeViewer {
    explorer: TreeExplorer,
    pipeline: RenderPipeline,
}

#[wasm_bindgen]
impl TreeViewer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<TreeViewer, JsValue> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let atmosphere = Atmosphere {
            sky: palette::sky(),
            fog_near: 12.0,
            fog_far: 30.0,
        };
        let pipeline = RenderPipeline::new(gl, width, height, atmosphere).map_err(|e| JsValue::from_str(&e))?;
        let explorer = TreeExplorer::new(TreeParams::default(), OrbitConfig::default(), width as f32, height as f32)?;

        let mut viewer = Self { explorer, pipeline };
        viewer.sync_mesh()?;
        Ok(viewer)
    }

    fn sync_mesh(&mut self) -> Result<(), JsValue> {
        if let Some(scene) = self.explorer.take_scene_update() {
            self.pipeline.upload_mesh(&scene.mesh).map_err(|e| JsValue::from_str(&e))?;
        }
        Ok(())
    }

    /// Apply a YAML `ViewerConfig`. Returns whether the tree was regenerated.
    pub fn configure(&mut self, yaml: &str) -> Result<bool, JsValue> {
        let changed = self.explorer.configure(yaml)?;
        self.sync_mesh()?;
        Ok(changed)
    }

    /// Advance `dt` seconds and draw
    pub fn render(&mut self, dt: f32) {
        let frame = self.explorer.frame(dt);
        self.pipeline.render(&frame);
    }

    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
        self.explorer.set_viewport(width as f32, height as f32);
    }

    /// Returns the part under the pointer, if any
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<String> {
        self.explorer.pointer_move(x, y).map(|p| p.as_str().to_owned())
    }

    pub fn on_pointer_leave(&mut self) {
        self.explorer.pointer_leave();
    }

    /// Returns the selected part, if the click hit one
    pub fn on_click(&mut self, x: f32, y: f32) -> Option<String> {
        self.explorer.click(x, y).map(|p| p.as_str().to_owned())
    }

    /// `callback(part)` runs on every selection
    pub fn set_on_part_selected(&mut self, callback: js_sys::Function) {
        self.explorer.set_on_selected(Box::new(move |part: TreePart| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(part.as_str())) {
                log::warn!("Selection callback failed for {}: {:?}", part, err);
            }
        }));
    }

    /// `callback(name, attributes_json)` receives tree interaction events
    pub fn set_telemetry(&mut self, callback: js_sys::Function) {
        self.explorer.set_telemetry(Box::new(JsCallbackSink::new(callback)));
    }

    pub fn select_part(&mut self, part: &str) -> Result<(), JsValue> {
        let part = TreePart::from_str(part)?;
        self.explorer.select_part(part);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.explorer.clear_selection();
    }

    pub fn selected_part(&self) -> Option<String> {
        self.explorer.selected_part().map(|p| p.as_str().to_owned())
    }

    /// Overlay record of a part as JSON
    pub fn part_info(&self, part: &str) -> Result<String, JsValue> {
        let part = TreePart::from_str(part)?;
        serde_json::to_string(self.explorer.part_info(part)).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Legend buttons as a JSON array of `{part, title, color, selected}`
    pub fn legend(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.explorer.legend()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Flip auto-rotation; returns the new state
    pub fn toggle_rotation(&mut self) -> bool {
        self.explorer.toggle_rotation()
    }

    pub fn is_rotating(&self) -> bool {
        self.explorer.camera().auto_rotate()
    }

    /// Drag by a pixel delta
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.explorer
            .camera_mut()
            .rotate(-delta_x * ORBIT_SPEED, -delta_y * ORBIT_SPEED);
    }

    /// Scroll by a wheel delta; positive zooms out
    pub fn zoom(&mut self, delta: f32) {
        if delta == 0.0 {
            return;
        }
        self.explorer.camera_mut().zoom(0.95f32.powf(-delta.signum()));
    }
}
