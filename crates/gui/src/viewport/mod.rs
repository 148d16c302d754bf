//! 3D viewport panel with OpenGL rendering

mod gl_renderer;
pub use forma_gui_lib::viewport::{camera, mesh};

use std::sync::{Arc, Mutex};

use egui::Ui;

use crate::state::AppState;
use camera::{DragTracker, OrbitCamera};
use gl_renderer::GlRenderer;
use mesh::MeshData;

/// 3D viewport panel with OpenGL rendering
pub struct ViewportPanel {
    drag: DragTracker,
    gl_renderer: Option<Arc<Mutex<GlRenderer>>>,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            drag: DragTracker::default(),
            gl_renderer: None,
        }
    }

    /// Initialize GL renderer (must be called with a GL context)
    pub fn init_gl(&mut self, gl: &glow::Context) {
        let renderer = GlRenderer::new(gl);
        self.gl_renderer = Some(Arc::new(Mutex::new(renderer)));
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

        self.handle_camera(&response, ui, state);

        if !ui.is_rect_visible(rect) {
            return;
        }

        self.render_gl(ui, rect, state);
        self.draw_overlays(ui, rect, state);
    }

    fn handle_camera(&mut self, response: &egui::Response, ui: &Ui, state: &mut AppState) {
        let camera = &mut state.configurator.camera;

        if response.drag_started_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.drag.pointer_down(pos.x, pos.y);
            }
        }
        if response.dragged_by(egui::PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                let pan = ui.input(|i| i.modifiers.shift);
                self.drag.pointer_move(pos.x, pos.y, pan, camera);
            }
        }
        if response.drag_stopped_by(egui::PointerButton::Primary) {
            self.drag.pointer_up();
        }
        if self.drag.is_dragging() && !response.dragged() {
            // Drag ended outside the panel (focus loss, pointer grab broken)
            self.drag.cancel();
        }

        // Scroll zoom: one fixed step per wheel event
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                camera.zoom(scroll.signum());
            }
        }
    }

    fn render_gl(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let Some(gl_renderer) = &self.gl_renderer else {
            // GL context unavailable; leave a hint instead of a dead panel
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "3D rendering unavailable (no GL context)",
                egui::FontId::proportional(13.0),
                egui::Color32::from_rgb(120, 120, 130),
            );
            return;
        };

        let renderer_clone = gl_renderer.clone();

        let camera = &state.configurator.camera;
        let camera_copy = CameraSnapshot::of(camera);

        let group = &state.configurator.scene.group;
        let meshes: Vec<MeshData> = group.parts.iter().map(|p| p.mesh.clone()).collect();
        let instances = group.instances();
        let version = state.configurator.scene.group_version();

        let ground = state.settings.ground.clone();
        let bg_color = state.settings.viewport.background_color;
        let wireframe = state.configurator.scene.wireframe;

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(eframe::egui_glow::CallbackFn::new(move |info, painter| {
                let gl = painter.gl();
                let camera = camera_copy.restore();

                let clip = info.clip_rect_in_pixels();
                let viewport = [
                    clip.left_px as f32,
                    clip.from_bottom_px as f32,
                    clip.width_px as f32,
                    clip.height_px as f32,
                ];

                if let Ok(mut r) = renderer_clone.lock() {
                    r.sync_ground(gl, &ground);
                    r.sync_group(gl, &meshes, version);

                    let render_params = gl_renderer::RenderParams {
                        viewport,
                        ground_visible: ground.visible,
                        ground_color: ground.color,
                        ground_opacity: ground.opacity,
                        wireframe,
                        bg_color,
                    };
                    r.paint(gl, &camera, &instances, &render_params);
                }
            })),
        };

        ui.painter().add(callback);
    }

    fn draw_overlays(&self, ui: &mut Ui, rect: egui::Rect, state: &AppState) {
        let painter = ui.painter_at(rect);

        let camera = &state.configurator.camera;
        let overlay_rect = egui::Rect::from_min_size(
            egui::pos2(rect.right() - 150.0, rect.top() + 4.0),
            egui::vec2(146.0, 44.0),
        );
        painter.rect_filled(
            overlay_rect,
            4.0,
            egui::Color32::from_rgba_premultiplied(0, 0, 0, 140),
        );
        painter.text(
            overlay_rect.min + egui::vec2(6.0, 4.0),
            egui::Align2::LEFT_TOP,
            format!(
                "Dist: {:.1}\nAz: {:.0}  Pol: {:.0}",
                camera.radius,
                camera.azimuth.to_degrees(),
                camera.polar.to_degrees(),
            ),
            egui::FontId::monospace(10.0),
            egui::Color32::from_rgb(160, 160, 170),
        );

        painter.text(
            egui::pos2(rect.center().x, rect.bottom() - 20.0),
            egui::Align2::CENTER_BOTTOM,
            "drag: orbit · shift+drag: pan · scroll: zoom · R: reset view",
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(100, 100, 110),
        );
    }
}

/// Plain-data copy of the camera so the paint callback can own it.
#[derive(Clone, Copy)]
struct CameraSnapshot {
    radius: f32,
    polar: f32,
    azimuth: f32,
    target: glam::Vec3,
    min_radius: f32,
    max_radius: f32,
}

impl CameraSnapshot {
    fn of(camera: &OrbitCamera) -> Self {
        Self {
            radius: camera.radius,
            polar: camera.polar,
            azimuth: camera.azimuth,
            target: camera.target,
            min_radius: camera.min_radius,
            max_radius: camera.max_radius,
        }
    }

    fn restore(&self) -> OrbitCamera {
        let mut camera = OrbitCamera::new(
            glam::Vec3::ONE,
            self.target,
            self.min_radius,
            self.max_radius,
        );
        camera.radius = self.radius;
        camera.polar = self.polar;
        camera.azimuth = self.azimuth;
        camera.target = self.target;
        camera
    }
}
