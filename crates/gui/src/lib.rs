// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui, GL rendering) remain in the binary crate.

pub mod build;
pub mod configurator;
pub mod fixtures;
pub mod harness;
pub mod state;
pub mod validation;

/// Subset of viewport types that are headless-testable (camera, mesh data).
/// The GL renderer and the egui panel stay in the binary crate.
pub mod viewport {
    pub mod camera;
    pub mod mesh;
}
