mod app;
mod components;
mod theme;
mod utils;

use catalog_app_core::{CatalogApplication, LoaderSettings};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn run(settings: LoaderSettings) -> eframe::Result<()> {
    setup_logging();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("CATALOG // BROWSER"),
        ..Default::default()
    };

    eframe::run_native(
        "Catalog Browser",
        options,
        Box::new(move |cc| {
            theme::setup(&cc.egui_ctx);
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let mut core = CatalogApplication::new(settings)?;
            if let Err(e) = core.mount() {
                tracing::error!("Failed to start initial load: {e}");
            }

            Ok(Box::new(app::CatalogUiApp::new(core)))
        }),
    )
}
