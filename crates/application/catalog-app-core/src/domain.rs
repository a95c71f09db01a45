use std::num::NonZeroUsize;

use catalog_core::{filter_indices, Selection};
use catalog_loader::LoadState;

/// Identifies one load cycle. Results tagged with an older id are discarded.
pub type LoadRunId = uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    pub api_base: String,
    pub collection: String,
    pub batch_size: NonZeroUsize,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            api_base: catalog_config::DEFAULT_API_BASE.to_string(),
            collection: catalog_config::DEFAULT_COLLECTION.to_string(),
            batch_size: NonZeroUsize::new(catalog_config::DEFAULT_BATCH_SIZE)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

/// State of one catalog view instance.
#[derive(Debug, Clone)]
pub struct AppState {
    pub settings: LoaderSettings,
    pub run_id: Option<LoadRunId>,
    pub load: LoadState,

    pub filter_term: String,
    pub selection: Selection,
}

impl AppState {
    pub fn new(settings: LoaderSettings) -> Self {
        Self {
            settings,
            run_id: None,
            load: LoadState::Loading,
            filter_term: String::new(),
            selection: Selection::none(),
        }
    }

    /// Length of the filtered view, zero unless the load is ready.
    pub fn filtered_len(&self) -> usize {
        self.load
            .entries()
            .map(|entries| filter_indices(entries, &self.filter_term).len())
            .unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(LoaderSettings::default())
    }
}
