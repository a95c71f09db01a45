use serde::{Deserialize, Serialize};

pub mod filter;
pub mod formats;
pub mod selection;
pub mod units;

pub use filter::{filter_entries, filter_indices, FilterMemo};
pub use selection::Selection;

pub type EntryId = u32;

/// One fully hydrated catalog record: the summary listing merged with its detail payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub name: String,
    pub source_url: String,
    pub image_url: String,
    pub categories: Vec<String>,
    /// Tenths of a kilogram.
    pub weight: u32,
    pub base_experience: u32,
}

impl CatalogEntry {
    pub fn from_parts(summary: formats::SummaryRecord, detail: formats::DetailPayload) -> Self {
        Self {
            id: detail.id,
            name: summary.name,
            source_url: summary.url,
            image_url: detail.sprites.front_default,
            categories: detail.types.into_iter().map(|t| t.kind.name).collect(),
            weight: detail.weight,
            base_experience: detail.base_experience,
        }
    }

    pub fn weight_label(&self) -> String {
        units::format_weight_kg(self.weight)
    }
}
