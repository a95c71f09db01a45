mod error;
pub mod loader;
pub mod remote;
pub mod state;

pub use error::LoadError;
pub use loader::BatchLoader;
pub use remote::{CatalogSource, HttpCatalogSource};
pub use state::LoadState;

/// Convenience constructor for a loader talking HTTP to `api_base`/`collection`.
pub fn http_loader(
    client: reqwest::Client,
    api_base: &str,
    collection: &str,
) -> Result<BatchLoader, LoadError> {
    let source = HttpCatalogSource::new(client, api_base, collection)?;
    Ok(BatchLoader::new(std::sync::Arc::new(source)))
}
