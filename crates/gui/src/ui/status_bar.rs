use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let config = state.configurator.config();
        ui.weak(format!("Profile: {}", config.profile().display_name()));

        ui.separator();

        let summary = match config {
            shared::Configuration::Vessel(v) => match v.kind {
                shared::VesselKind::Vertical => {
                    format!("{} · h {:.1} · ⌀ {:.1}", v.kind.display_name(), v.height, v.diameter)
                }
                shared::VesselKind::Horizontal => format!(
                    "{} · {:.1} × {:.1} × {:.1}",
                    v.kind.display_name(),
                    v.length,
                    v.secondary_height,
                    v.width
                ),
                shared::VesselKind::Spherical => {
                    format!("{} · ⌀ {:.1}", v.kind.display_name(), v.sphere_diameter)
                }
            },
            shared::Configuration::Vehicle(v) => format!(
                "{} · {} turret · {:.0}%",
                v.model.display_name(),
                v.turret_type.display_name(),
                v.scale * 100.0
            ),
        };
        ui.label(summary);

        ui.separator();
        ui.weak(format!("Rebuilds: {}", state.configurator.scene.rebuild_count()));

        if state.configurator.scene.wireframe {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 200, 100), "Wireframe");
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Forma v0.1");
        });
    });
}
