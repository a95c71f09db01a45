use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Loading
    Reload,
    SetBatchSize(NonZeroUsize),

    // Search
    SetFilter(String),

    // Detail overlay
    Select(usize),
    Next,
    Previous,
    Close,
}
