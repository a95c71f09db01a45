use std::num::NonZeroUsize;

use catalog_loader::LoadState;

use crate::domain::LoadRunId;

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Load cycle
    LoadStarted {
        run_id: LoadRunId,
        batch_size: NonZeroUsize,
    },
    LoadFinished {
        run_id: LoadRunId,
        state: LoadState,
    },

    // Search
    FilterChanged(String),

    // Detail overlay
    EntrySelected(usize),
    NavigatedNext,
    NavigatedPrevious,
    OverlayClosed,
}
