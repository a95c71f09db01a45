use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

use catalog_core::CatalogEntry;
use futures::future::try_join_all;
use tracing::{error, info, warn};

use crate::{CatalogSource, LoadError, LoadState};

/// List-then-detail batch loader.
#[derive(Clone)]
pub struct BatchLoader {
    source: Arc<dyn CatalogSource>,
}

impl BatchLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch the first `batch_size` summaries, then every detail concurrently.
    ///
    /// All-or-nothing: the first failing detail request fails the batch and no partially
    /// hydrated entries are returned. Output order follows the listing.
    pub async fn load(&self, batch_size: NonZeroUsize) -> Result<Vec<CatalogEntry>, LoadError> {
        let mut summaries = self.source.fetch_summaries(batch_size.get()).await?;
        summaries.truncate(batch_size.get());

        let source = &*self.source;
        let details = try_join_all(summaries.iter().map(|s| source.fetch_detail(s))).await?;

        let entries: Vec<CatalogEntry> = summaries
            .into_iter()
            .zip(details)
            .map(|(summary, detail)| CatalogEntry::from_parts(summary, detail))
            .collect();

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                warn!("duplicate entry name in batch: {}", entry.name);
            }
        }

        Ok(entries)
    }

    /// Batch-load boundary: run [`BatchLoader::load`] and fold the outcome into a
    /// [`LoadState`]. The raw failure is logged; only the user-facing message is kept.
    pub async fn load_state(&self, batch_size: NonZeroUsize) -> LoadState {
        info!("loading catalog batch of {batch_size}");
        let result = self.load(batch_size).await;
        match &result {
            Ok(entries) => info!("catalog batch ready: {} entries", entries.len()),
            Err(e) => error!("catalog batch failed: {e}"),
        }
        LoadState::from_result(result)
    }
}
