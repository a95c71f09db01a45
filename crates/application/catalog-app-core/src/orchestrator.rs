use std::num::NonZeroUsize;

use anyhow::Context;
use catalog_loader::{BatchLoader, LoadState};
use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use crate::domain::LoadRunId;

/// Runs load cycles on the shared runtime and reports the outcome as a [`DomainEvent`].
///
/// A cycle is never aborted. Superseded cycles still complete and their result is dropped by
/// the receiver because the run id no longer matches.
pub struct LoadOrchestrator {
    loader: BatchLoader,
    tx: mpsc::Sender<DomainEvent>,
}

impl LoadOrchestrator {
    pub fn new(loader: BatchLoader, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self { loader, tx }
    }

    pub fn start_load(&self, run_id: LoadRunId, batch_size: NonZeroUsize) -> anyhow::Result<()> {
        let tx = self.tx.clone();
        let loader = self.loader.clone();

        std::thread::Builder::new()
            .name("catalog-load-batch".into())
            .spawn(move || {
                let state = match crate::async_runtime::runtime() {
                    Ok(rt) => rt.block_on(loader.load_state(batch_size)),
                    Err(e) => {
                        tracing::error!("Failed to start async runtime: {e}");
                        LoadState::Error(format!("Failed to start async runtime: {e}"))
                    }
                };

                if tx
                    .blocking_send(DomainEvent::LoadFinished { run_id, state })
                    .is_err()
                {
                    tracing::debug!("load {run_id} finished after the view was dropped");
                }
            })
            .context("Failed to start load worker thread")?;

        Ok(())
    }
}
