use std::sync::Arc;

use catalog_core::CatalogEntry;

use crate::LoadError;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Error(String),
    Ready(Arc<[CatalogEntry]>),
}

impl LoadState {
    pub fn from_result(result: Result<Vec<CatalogEntry>, LoadError>) -> Self {
        match result {
            Ok(entries) => LoadState::Ready(entries.into()),
            Err(e) => LoadState::Error(e.user_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn entries(&self) -> Option<&[CatalogEntry]> {
        match self {
            LoadState::Ready(entries) => Some(&entries[..]),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }
}
