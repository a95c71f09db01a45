pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod orchestrator;
pub mod viewmodel;

pub use app::CatalogApplication;
pub use app_core::*;
pub use domain::{AppState, LoadRunId, LoaderSettings};
pub use viewmodel::*;

pub use catalog_loader::LoadState;
