//! Application menu bar and settings window

use eframe::egui;

use crate::state::AppState;

/// Show the file menu
pub fn file_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("File", |ui| {
        if ui.button("New").clicked() {
            let config = shared::Configuration::default();
            state.form = config.clone();
            state.configurator.update_config(config);
            ui.close_menu();
        }
        if ui.button("Open configuration...").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Open configuration")
                .add_filter("JSON", &["json"])
                .pick_file()
            {
                match std::fs::read_to_string(&path) {
                    Ok(json) => match serde_json::from_str::<shared::Configuration>(&json) {
                        Ok(config) => {
                            state.form = config.clone();
                            state.configurator.update_config(config);
                            tracing::info!("Loaded configuration from {}", path.display());
                        }
                        Err(e) => tracing::error!("Failed to parse configuration: {e}"),
                    },
                    Err(e) => tracing::error!("Failed to read file: {e}"),
                }
            }
        }
        if ui.button("Save configuration...").clicked() {
            ui.close_menu();
            if let Some(path) = rfd::FileDialog::new()
                .set_title("Save configuration")
                .add_filter("JSON", &["json"])
                .set_file_name("configuration.json")
                .save_file()
            {
                match serde_json::to_string_pretty(state.configurator.config()) {
                    Ok(json) => {
                        if let Err(e) = std::fs::write(&path, json) {
                            tracing::error!("Failed to write configuration: {e}");
                        } else {
                            tracing::info!("Saved configuration to {}", path.display());
                        }
                    }
                    Err(e) => tracing::error!("Failed to serialize configuration: {e}"),
                }
            }
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Show the view menu
pub fn view_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("View", |ui| {
        if ui.button("Reset camera").clicked() {
            state.configurator.reset_camera();
            ui.close_menu();
        }
        ui.separator();
        let mut wireframe = state.configurator.scene.wireframe;
        if ui.checkbox(&mut wireframe, "Wireframe").changed() {
            state.configurator.toggle_wireframe();
        }
        ui.checkbox(&mut state.settings.ground.visible, "Ground plane");
    });
}

/// Show the settings menu
pub fn settings_menu(ui: &mut egui::Ui, state: &mut AppState) {
    ui.menu_button("Settings", |ui| {
        if ui.button("Preferences...").clicked() {
            state.show_settings_window = true;
            ui.close_menu();
        }
    });
}

/// Show the settings window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new("Preferences")
        .open(&mut open)
        .resizable(true)
        .default_width(360.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_ground_settings(ui, state);
                show_viewport_settings(ui, state);
                show_ui_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_ground_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Ground");
    ui.checkbox(&mut state.settings.ground.visible, "Show ground plane");

    ui.horizontal(|ui| {
        ui.label("Size");
        ui.add(
            egui::DragValue::new(&mut state.settings.ground.size)
                .speed(1.0)
                .range(10.0..=500.0),
        );
    });

    ui.horizontal(|ui| {
        ui.label("Color");
        let mut color = egui::Color32::from_rgb(
            state.settings.ground.color[0],
            state.settings.ground.color[1],
            state.settings.ground.color[2],
        );
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.ground.color = [color.r(), color.g(), color.b()];
        }
    });

    ui.horizontal(|ui| {
        ui.label("Opacity");
        ui.add(egui::Slider::new(&mut state.settings.ground.opacity, 0.0..=1.0));
    });
    ui.add_space(10.0);
}

fn show_viewport_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Viewport");
    ui.horizontal(|ui| {
        ui.label("Background");
        let mut color = egui::Color32::from_rgb(
            state.settings.viewport.background_color[0],
            state.settings.viewport.background_color[1],
            state.settings.viewport.background_color[2],
        );
        if ui.color_edit_button_srgba(&mut color).changed() {
            state.settings.viewport.background_color = [color.r(), color.g(), color.b()];
        }
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Interface");
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Apply").clicked() {
            state.settings.save();
        }
        if ui.button("Reset").clicked() {
            state.settings = crate::state::settings::AppSettings::default();
        }
        if ui.button("Close").clicked() {
            state.show_settings_window = false;
        }
    });
}
