mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use forma_gui_lib::build;
pub use forma_gui_lib::configurator;
pub use forma_gui_lib::state;

use app::ConfiguratorApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "forma_gui=info".into()),
        )
        .init();

    // Parse --config <path> argument
    let initial_config = parse_config_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Forma — 3D Configurator")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "forma-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(ConfiguratorApp::new(cc, initial_config)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_config_arg() -> Option<shared::Configuration> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--config" && i + 1 < args.len() {
            let path = &args[i + 1];
            match std::fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<shared::Configuration>(&json) {
                    Ok(config) => {
                        tracing::info!(
                            "Loaded {} configuration from {path}",
                            config.profile().display_name()
                        );
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::error!("Failed to parse configuration JSON from {path}: {e}");
                    }
                },
                Err(e) => {
                    tracing::error!("Failed to read configuration file {path}: {e}");
                }
            }
            break;
        }
        i += 1;
    }
    None
}
