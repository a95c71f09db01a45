pub mod commands;

use std::num::NonZeroUsize;

use clap::Args;

/// Where entries are loaded from and how many.
#[derive(Args, Clone, Debug)]
pub struct SourceArgs {
    /// Root of the upstream REST API.
    #[arg(long, global = true, default_value = catalog_config::DEFAULT_API_BASE)]
    pub api_base: String,
    /// Collection listed under the API root.
    #[arg(long, global = true, default_value = catalog_config::DEFAULT_COLLECTION)]
    pub collection: String,
    /// Number of entries to load.
    #[arg(short, long, global = true, default_value_t = catalog_config::DEFAULT_BATCH_SIZE)]
    pub limit: usize,
}

impl SourceArgs {
    pub fn batch_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(catalog_config::clamp_batch_size(self.limit)).unwrap_or(NonZeroUsize::MIN)
    }
}
