//! Tree viewer state without the GPU: model, picking, hover and selection,
//! camera and telemetry. The wasm widget drives this and draws its output.

use serde::Serialize;

use crate::animation::SwayParams;
use crate::content::{PartCatalog, PartInfo, TreePart};
use crate::error::Result;
use crate::growth::{TreeModel, TreeParams};
use crate::interaction::{
    HitInfo, OrbitCamera, OrbitConfig, PointerEvent, PointerKind, PointerTracker, Ray, RayPicker,
    SelectionCallback, Transition, TreeInteraction,
};
use crate::mesh::{SceneBuilder, TreeScene};
use crate::render::FrameParams;
use crate::telemetry::{InteractionKind, NullSink, TelemetryEvent, TelemetrySink};

use super::config::ViewerConfig;

/// Legend button for one part, in part order
#[derive(Debug, Serialize)]
pub struct PartLegendEntry<'a> {
    pub part: TreePart,
    pub title: &'a str,
    pub color: &'a str,
    pub selected: bool,
}

pub struct TreeExplorer {
    model: TreeModel,
    builder: SceneBuilder,
    scene: TreeScene,
    /// Set when the scene was rebuilt and has not been uploaded yet
    scene_changed: bool,
    picker: RayPicker,
    interaction: TreeInteraction,
    tracker: PointerTracker,
    camera: OrbitCamera,
    parts: PartCatalog,
    telemetry: Box<dyn TelemetrySink>,
    sway: SwayParams,
    time: f32,
    viewport: (f32, f32),
}

impl TreeExplorer {
    pub fn new(params: TreeParams, camera: OrbitConfig, width: f32, height: f32) -> Result<Self> {
        let parts = PartCatalog::builtin()?;
        let model = TreeModel::generate(params);
        let builder = SceneBuilder::default();
        let scene = builder.build(&model);
        let mut picker = RayPicker::new();
        picker.set_targets(scene.pick_targets());

        Ok(Self {
            model,
            builder,
            scene,
            scene_changed: true,
            picker,
            interaction: TreeInteraction::new(),
            tracker: PointerTracker::default(),
            camera: OrbitCamera::new(camera),
            parts,
            telemetry: Box::new(NullSink),
            sway: SwayParams::default(),
            time: 0.0,
            viewport: (width, height),
        })
    }

    pub fn set_telemetry(&mut self, sink: Box<dyn TelemetrySink>) {
        self.telemetry = sink;
    }

    pub fn set_on_selected(&mut self, callback: SelectionCallback) {
        self.interaction.set_on_selected(callback);
    }

    /// Apply a YAML config. Geometry is rebuilt only if the tree params
    /// changed; returns whether it was.
    pub fn configure(&mut self, yaml: &str) -> Result<bool> {
        let config = ViewerConfig::from_yaml(yaml)?;
        config.camera.apply(&mut self.camera);
        if !self.model.update(config.tree) {
            return Ok(false);
        }
        self.scene = self.builder.build(&self.model);
        self.picker.set_targets(self.scene.pick_targets());
        self.scene_changed = true;
        // segment ids from the old model mean nothing now
        self.tracker = PointerTracker::default();
        self.interaction.clear_hover();
        Ok(true)
    }

    pub fn model(&self) -> &TreeModel {
        &self.model
    }

    pub fn scene(&self) -> &TreeScene {
        &self.scene
    }

    /// The scene if it changed since the last call
    pub fn take_scene_update(&mut self) -> Option<&TreeScene> {
        if !std::mem::take(&mut self.scene_changed) {
            return None;
        }
        Some(&self.scene)
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
    }

    fn aspect(&self) -> f32 {
        let (width, height) = self.viewport;
        if height > 0.0 { width / height } else { 1.0 }
    }

    /// Nearest tree segment under a canvas pixel
    pub fn pick(&self, x: f32, y: f32) -> Option<HitInfo> {
        let (width, height) = self.viewport;
        let view = self.camera.view_matrix();
        let projection = self.camera.projection_matrix(self.aspect());
        let ray = Ray::from_screen(x, y, width, height, &view, &projection)?;
        self.picker.pick(&ray)
    }

    /// Track the pointer. Returns the part now under it.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<TreePart> {
        let hit = self.pick(x, y).map(|h| h.segment);
        let events = self.tracker.move_to(hit);
        self.dispatch(events);
        hit.and_then(|segment| self.model.part_of(segment))
    }

    pub fn pointer_leave(&mut self) {
        let events = self.tracker.move_to(None);
        self.dispatch(events);
    }

    /// Select the part under a canvas pixel, if any
    pub fn click(&mut self, x: f32, y: f32) -> Option<TreePart> {
        let segment = self.pick(x, y)?.segment;
        match self.interaction.handle(&self.model, PointerEvent::new(PointerKind::Click, segment))? {
            Transition::Selected(part) => {
                self.camera.set_auto_rotate(false);
                self.telemetry.emit(&TelemetryEvent::TreeInteraction {
                    part,
                    kind: InteractionKind::Click,
                });
                Some(part)
            }
            _ => None,
        }
    }

    fn dispatch(&mut self, events: Vec<PointerEvent>) {
        for event in events {
            if let Some(Transition::HoverStarted(part)) = self.interaction.handle(&self.model, event) {
                self.telemetry.emit(&TelemetryEvent::TreeInteraction {
                    part,
                    kind: InteractionKind::Hover,
                });
            }
        }
    }

    /// Select from outside the canvas, e.g. a legend button
    pub fn select_part(&mut self, part: TreePart) {
        self.interaction.select(part);
        self.camera.set_auto_rotate(false);
    }

    /// Close the info overlay. Rotation stays as it is.
    pub fn clear_selection(&mut self) {
        self.interaction.clear_selection();
    }

    pub fn selected_part(&self) -> Option<TreePart> {
        self.interaction.selected()
    }

    pub fn is_hovered(&self, part: TreePart) -> bool {
        self.interaction.is_hovered(part)
    }

    pub fn part_info(&self, part: TreePart) -> &PartInfo {
        self.parts.get(part)
    }

    pub fn legend(&self) -> Vec<PartLegendEntry<'_>> {
        let selected = self.selected_part();
        self.parts
            .iter()
            .map(|(part, info)| PartLegendEntry {
                part,
                title: &info.title,
                color: info.color.as_str(),
                selected: selected == Some(part),
            })
            .collect()
    }

    pub fn toggle_rotation(&mut self) -> bool {
        let enabled = !self.camera.auto_rotate();
        self.camera.set_auto_rotate(enabled);
        enabled
    }

    /// Advance time and camera by `dt` seconds and describe the frame
    pub fn frame(&mut self, dt: f32) -> FrameParams {
        self.time += dt.max(0.0);
        self.camera.update(dt);
        FrameParams {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(self.aspect()),
            camera_position: self.camera.eye(),
            time: self.time,
            hover_mask: self.interaction.hover_mask(),
            sway: self.sway,
        }
    }
}
