use catalog_core::selection::shows_navigation;
use catalog_core::{CatalogEntry, EntryId, FilterMemo};
use catalog_loader::LoadState;

use crate::domain::{AppState, LoadRunId};

pub type FilterCache = FilterMemo<Option<LoadRunId>>;

pub fn empty_results_message(term: &str) -> String {
    format!("No results for \"{term}\"")
}

#[derive(Debug, Clone)]
pub struct CardVm {
    /// Position in the filtered view; this is what a click selects.
    pub position: usize,
    pub id: EntryId,
    pub name: String,
    pub image_url: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct DetailVm {
    pub id_label: String,
    pub name: String,
    pub image_url: String,
    pub categories: Vec<String>,
    pub weight_label: String,
    pub base_experience_label: String,
    pub position_label: String,
    pub show_navigation: bool,
}

impl DetailVm {
    fn new(entry: &CatalogEntry, position: usize, len: usize) -> Self {
        Self {
            id_label: format!("#{}", entry.id),
            name: entry.name.clone(),
            image_url: entry.image_url.clone(),
            categories: entry.categories.clone(),
            weight_label: entry.weight_label(),
            base_experience_label: entry.base_experience.to_string(),
            position_label: format!("{} / {}", position + 1, len),
            show_navigation: shows_navigation(len),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadyVm {
    pub cards: Vec<CardVm>,
    /// Set instead of `cards` when the filter matches nothing.
    pub empty_message: Option<String>,
    pub overlay: Option<DetailVm>,
    pub result_count_label: String,
}

/// Top-level presentation state. Exactly one of the three is rendered.
#[derive(Debug, Clone)]
pub enum CatalogVm {
    Loading { label: String },
    Error { message: String },
    Ready(ReadyVm),
}

pub fn catalog_vm(state: &AppState, cache: &mut FilterCache) -> CatalogVm {
    let entries = match &state.load {
        LoadState::Loading => {
            return CatalogVm::Loading {
                label: format!("Loading {} entries…", state.settings.batch_size),
            }
        }
        LoadState::Error(message) => {
            return CatalogVm::Error {
                message: message.clone(),
            }
        }
        LoadState::Ready(entries) => entries,
    };

    let view = cache.view(&state.run_id, entries, &state.filter_term);
    let selected = state.selection.revalidate(view.len()).index();

    let cards: Vec<CardVm> = view
        .iter()
        .enumerate()
        .map(|(position, &ix)| {
            let e = &entries[ix];
            CardVm {
                position,
                id: e.id,
                name: e.name.clone(),
                image_url: e.image_url.clone(),
                is_selected: selected == Some(position),
            }
        })
        .collect();

    let overlay = selected.map(|pos| DetailVm::new(&entries[view[pos]], pos, view.len()));

    let empty_message = if cards.is_empty() {
        Some(empty_results_message(&state.filter_term))
    } else {
        None
    };

    CatalogVm::Ready(ReadyVm {
        result_count_label: format!("{} of {}", cards.len(), entries.len()),
        cards,
        empty_message,
        overlay,
    })
}
