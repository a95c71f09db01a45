#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::num::NonZeroUsize;

use catalog_app_core::LoaderSettings;
use clap::Parser;

/// Desktop catalog browser.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of entries to load.
    #[arg(long, default_value_t = catalog_config::DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Root of the upstream REST API.
    #[arg(long, default_value = catalog_config::DEFAULT_API_BASE)]
    api_base: String,
}

fn main() {
    let args = Args::parse();
    let settings = LoaderSettings {
        api_base: args.api_base,
        batch_size: NonZeroUsize::new(catalog_config::clamp_batch_size(args.batch_size))
            .unwrap_or(NonZeroUsize::MIN),
        ..LoaderSettings::default()
    };

    if let Err(err) = catalog_ui::run(settings) {
        eprintln!("Catalog browser failed: {err}");
        std::process::exit(1);
    }
}
