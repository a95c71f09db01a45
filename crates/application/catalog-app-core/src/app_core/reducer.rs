use catalog_core::Selection;
use catalog_loader::LoadState;

use crate::domain::AppState;

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::LoadStarted { run_id, batch_size } => {
            state.run_id = Some(run_id);
            state.settings.batch_size = batch_size;
            state.load = LoadState::Loading;
            state.selection = Selection::none();
        }

        DomainEvent::LoadFinished { run_id, state: load } => {
            // Last write wins: only the most recently started cycle may publish.
            if state.run_id == Some(run_id) && state.load.is_loading() {
                state.load = load;
                state.selection = Selection::none();
            }
        }

        DomainEvent::FilterChanged(term) => {
            if term != state.filter_term {
                state.filter_term = term;
                // The old index refers to a different view; never carry it over.
                state.selection = Selection::none();
            }
        }

        DomainEvent::EntrySelected(ix) => {
            let len = state.filtered_len();
            state.selection = state.selection.select(ix, len);
        }

        DomainEvent::NavigatedNext => {
            let len = state.filtered_len();
            state.selection = state.selection.next(len);
        }

        DomainEvent::NavigatedPrevious => {
            let len = state.filtered_len();
            state.selection = state.selection.previous(len);
        }

        DomainEvent::OverlayClosed => state.selection = state.selection.close(),
    }
    state
}
