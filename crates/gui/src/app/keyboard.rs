//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    ctx.input(|i| {
        // R — reset camera to the profile's home view
        if i.key_pressed(egui::Key::R) && !i.modifiers.command {
            state.configurator.reset_camera();
        }
        // X — toggle wireframe
        if i.key_pressed(egui::Key::X) && !i.modifiers.command {
            state.configurator.toggle_wireframe();
        }
        // G — toggle ground plane
        if i.key_pressed(egui::Key::G) && !i.modifiers.command {
            state.settings.ground.visible = !state.settings.ground.visible;
        }
    });
}
