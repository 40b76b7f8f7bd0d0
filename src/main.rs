use fundsage::application::provisioner::ModelProvisioner;
use fundsage::config::Config;
use fundsage::infrastructure::artifact_store::ArtifactStore;
use fundsage::interfaces::app::AdvisorApp;

use tracing::{info, Level};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Fundsage Advisor...");

    let config = Config::default();
    let store = ArtifactStore::new()?;
    let provisioner = ModelProvisioner::new(&config, store);
    let app = AdvisorApp::new(&config, provisioner);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Fundsage Advisor"),
        ..Default::default()
    };

    eframe::run_native(
        "Fundsage Advisor",
        native_options,
        Box::new(|cc| {
            fundsage::interfaces::ui::configure_style(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
