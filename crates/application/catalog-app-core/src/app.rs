use std::num::NonZeroUsize;

use anyhow::Context;
use catalog_core::{filter_entries, CatalogEntry};
use catalog_loader::BatchLoader;
use tokio::sync::mpsc;

use crate::app_core::{reduce, AppCommand, DomainEvent};
use crate::domain::{AppState, LoadRunId, LoaderSettings};
use crate::orchestrator::LoadOrchestrator;
use crate::viewmodel::{catalog_vm, CatalogVm, FilterCache};

/// One catalog view instance.
///
/// Owns its load state for its whole lifetime: created by [`CatalogApplication::new`], first
/// load started by [`CatalogApplication::mount`], released when dropped. All state changes
/// go through [`reduce`] on the owning thread.
pub struct CatalogApplication {
    pub state: AppState,

    orchestrator: LoadOrchestrator,
    filter_cache: FilterCache,

    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl CatalogApplication {
    /// Build an instance talking HTTP to the configured upstream.
    pub fn new(settings: LoaderSettings) -> anyhow::Result<Self> {
        let client =
            catalog_infra::default_http_client().context("Failed to build HTTP client")?;
        let loader = catalog_loader::http_loader(client, &settings.api_base, &settings.collection)
            .context("Invalid upstream configuration")?;
        Ok(Self::with_loader(loader, settings))
    }

    pub fn with_loader(loader: BatchLoader, settings: LoaderSettings) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(100);
        Self {
            state: AppState::new(settings),
            orchestrator: LoadOrchestrator::new(loader, msg_tx.clone()),
            filter_cache: FilterCache::new(),
            msg_rx,
            msg_tx,
        }
    }

    /// Start the first load cycle.
    pub fn mount(&mut self) -> anyhow::Result<()> {
        self.start_load(self.state.settings.batch_size)
    }

    pub fn dispatch(&mut self, cmd: AppCommand) -> anyhow::Result<()> {
        match cmd {
            AppCommand::Reload => return self.start_load(self.state.settings.batch_size),
            AppCommand::SetBatchSize(n) => {
                if n != self.state.settings.batch_size {
                    return self.start_load(n);
                }
            }
            AppCommand::SetFilter(term) => self.apply(DomainEvent::FilterChanged(term)),
            AppCommand::Select(ix) => self.apply(DomainEvent::EntrySelected(ix)),
            AppCommand::Next => self.apply(DomainEvent::NavigatedNext),
            AppCommand::Previous => self.apply(DomainEvent::NavigatedPrevious),
            AppCommand::Close => self.apply(DomainEvent::OverlayClosed),
        }
        Ok(())
    }

    fn start_load(&mut self, batch_size: NonZeroUsize) -> anyhow::Result<()> {
        let run_id: LoadRunId = uuid::Uuid::new_v4();
        self.apply(DomainEvent::LoadStarted { run_id, batch_size });
        self.filter_cache.invalidate();

        if let Err(e) = self.orchestrator.start_load(run_id, batch_size) {
            self.apply(DomainEvent::LoadFinished {
                run_id,
                state: catalog_loader::LoadState::Error(e.to_string()),
            });
            return Err(e);
        }
        Ok(())
    }

    /// Drain finished load cycles. Results of superseded cycles are ignored.
    pub fn handle_load_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            if let DomainEvent::LoadFinished { run_id, .. } = &ev {
                if self.state.run_id != Some(*run_id) {
                    tracing::debug!("dropping result of superseded load {run_id}");
                    continue;
                }
            }
            self.apply(ev);
        }
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(self.state.clone(), ev);
    }

    pub fn sender(&self) -> mpsc::Sender<DomainEvent> {
        self.msg_tx.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.load.is_loading()
    }

    pub fn view(&mut self) -> CatalogVm {
        catalog_vm(&self.state, &mut self.filter_cache)
    }

    /// The filtered view as entries, empty unless loaded.
    pub fn filtered_entries(&self) -> Vec<&CatalogEntry> {
        self.state
            .load
            .entries()
            .map(|entries| filter_entries(entries, &self.state.filter_term))
            .unwrap_or_default()
    }

    pub fn selected_entry(&self) -> Option<&CatalogEntry> {
        let ix = self.state.selection.index()?;
        self.filtered_entries().get(ix).copied()
    }

    pub fn filter_recomputations(&self) -> u64 {
        self.filter_cache.recomputations()
    }
}
