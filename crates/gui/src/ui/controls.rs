//! Configuration control panel.
//!
//! Edits the form copy in `AppState` and pushes every change straight into
//! the configurator, so the viewport always reflects the panel.

use egui::Ui;
use shared::{
    Camouflage, Configuration, Profile, TurretType, VehicleConfig, VehicleModel, VesselConfig,
    VesselKind,
};

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Configuration");
    ui.separator();

    let mut changed = false;

    // Profile selector
    ui.horizontal(|ui| {
        ui.label("Profile");
        let current = state.form.profile();
        egui::ComboBox::from_id_salt("profile_combo")
            .selected_text(current.display_name())
            .show_ui(ui, |ui| {
                for profile in [Profile::Vessel, Profile::Vehicle] {
                    if ui
                        .selectable_label(current == profile, profile.display_name())
                        .clicked()
                        && current != profile
                    {
                        state.form = Configuration::default_for(profile);
                        changed = true;
                    }
                }
            });
    });
    ui.add_space(6.0);

    match &mut state.form {
        Configuration::Vessel(vessel) => changed |= vessel_controls(ui, vessel),
        Configuration::Vehicle(vehicle) => changed |= vehicle_controls(ui, vehicle),
    }

    ui.add_space(10.0);
    ui.separator();

    let mut wireframe = state.configurator.scene.wireframe;
    if ui.checkbox(&mut wireframe, "Wireframe").changed() {
        state.configurator.toggle_wireframe();
    }

    ui.horizontal(|ui| {
        if ui.button("Reset view").clicked() {
            state.configurator.reset_camera();
        }
        if ui.button("Reset values").clicked() {
            state.form = Configuration::default_for(state.form.profile());
            changed = true;
        }
    });

    if changed {
        state.configurator.update_config(state.form.clone());
    }
}

fn vessel_controls(ui: &mut Ui, vessel: &mut VesselConfig) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Type");
        egui::ComboBox::from_id_salt("vessel_kind")
            .selected_text(vessel.kind.display_name())
            .show_ui(ui, |ui| {
                for kind in VesselKind::all() {
                    changed |= ui
                        .selectable_value(&mut vessel.kind, *kind, kind.display_name())
                        .changed();
                }
            });
    });
    ui.add_space(4.0);

    egui::Grid::new("vessel_dims")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| match vessel.kind {
            VesselKind::Vertical => {
                ui.label("Height");
                changed |= drag(ui, &mut vessel.height, 1.0..=50.0);
                ui.end_row();

                ui.label("Diameter");
                changed |= drag(ui, &mut vessel.diameter, 1.0..=30.0);
                ui.end_row();
            }
            VesselKind::Horizontal => {
                ui.label("Length");
                changed |= drag(ui, &mut vessel.length, 1.0..=50.0);
                ui.end_row();

                ui.label("Height");
                changed |= drag(ui, &mut vessel.secondary_height, 1.0..=20.0);
                ui.end_row();

                ui.label("Width");
                changed |= drag(ui, &mut vessel.width, 1.0..=20.0);
                ui.end_row();
            }
            VesselKind::Spherical => {
                ui.label("Diameter");
                changed |= drag(ui, &mut vessel.sphere_diameter, 1.0..=30.0);
                ui.end_row();
            }
        });

    ui.add_space(4.0);
    egui::Grid::new("vessel_misc")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Wall (mm)");
            changed |= drag(ui, &mut vessel.wall_thickness, 1.0..=50.0);
            ui.end_row();
        });

    changed
}

fn vehicle_controls(ui: &mut Ui, vehicle: &mut VehicleConfig) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label("Model");
        egui::ComboBox::from_id_salt("vehicle_model")
            .selected_text(vehicle.model.display_name())
            .show_ui(ui, |ui| {
                for model in VehicleModel::all() {
                    changed |= ui
                        .selectable_value(&mut vehicle.model, *model, model.display_name())
                        .changed();
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("Turret");
        egui::ComboBox::from_id_salt("vehicle_turret")
            .selected_text(vehicle.turret_type.display_name())
            .show_ui(ui, |ui| {
                for turret in TurretType::all() {
                    changed |= ui
                        .selectable_value(&mut vehicle.turret_type, *turret, turret.display_name())
                        .changed();
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("Camouflage");
        egui::ComboBox::from_id_salt("vehicle_camo")
            .selected_text(vehicle.camouflage.display_name())
            .show_ui(ui, |ui| {
                for camo in Camouflage::all() {
                    changed |= ui
                        .selectable_value(&mut vehicle.camouflage, *camo, camo.display_name())
                        .changed();
                }
            });
    });

    // Custom paint only applies when no camouflage is selected
    ui.add_enabled_ui(vehicle.camouflage == Camouflage::None, |ui| {
        ui.horizontal(|ui| {
            ui.label("Armor color");
            let mut rgb = vehicle.armor_color.to_srgb8();
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                vehicle.armor_color = shared::Rgb::from_srgb8(rgb[0], rgb[1], rgb[2]);
                changed = true;
            }
        });
    });

    ui.horizontal(|ui| {
        ui.label("Scale");
        changed |= ui
            .add(egui::Slider::new(&mut vehicle.scale, 0.5..=2.0))
            .changed();
    });

    changed
}

fn drag(ui: &mut Ui, value: &mut f32, range: std::ops::RangeInclusive<f32>) -> bool {
    ui.add(egui::DragValue::new(value).speed(0.1).range(range))
        .changed()
}
