use catalog_core::formats::{DetailPayload, ListPage, SummaryRecord};
use catalog_infra::get_json;
use reqwest::{Client, Url};

use crate::LoadError;

/// Upstream collaborator of the loader: one listing call, one detail call per record.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, LoadError>;
    async fn fetch_detail(&self, summary: &SummaryRecord) -> Result<DetailPayload, LoadError>;
}

/// REST source reading `<api_base>/<collection>?limit=<n>` and then each record's detail URL.
pub struct HttpCatalogSource {
    client: Client,
    list_url: Url,
}

/// Normalize an API base so it can be joined with relative paths.
/// `https://host/api/v2` and `https://host/api/v2/` resolve to the same base.
pub(crate) fn normalize_api_base(api_base: &str) -> Result<Url, LoadError> {
    let mut url = Url::parse(api_base)
        .map_err(|e| LoadError::Unexpected(format!("invalid api base {api_base}: {e}")))?;

    // Without the trailing slash `Url::join("pokemon")` would replace the last segment
    // instead of appending to it.
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    url.set_query(None);

    Ok(url)
}

impl HttpCatalogSource {
    pub fn new(client: Client, api_base: &str, collection: &str) -> Result<Self, LoadError> {
        let base = normalize_api_base(api_base)?;
        let collection = collection.trim_matches('/');
        if collection.is_empty() {
            return Err(LoadError::Unexpected("collection name is empty".into()));
        }
        let list_url = base.join(collection).map_err(|e| {
            LoadError::Unexpected(format!("bad collection url from {base} + {collection}: {e}"))
        })?;

        Ok(Self { client, list_url })
    }

    pub fn list_url(&self, limit: usize) -> Url {
        let mut url = self.list_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("limit", &limit.to_string());
        url
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_summaries(&self, limit: usize) -> Result<Vec<SummaryRecord>, LoadError> {
        let page: ListPage = get_json(&self.client, self.list_url(limit)).await?;
        tracing::debug!(
            "listing returned {} of {} records",
            page.results.len(),
            page.count
        );
        Ok(page.results)
    }

    async fn fetch_detail(&self, summary: &SummaryRecord) -> Result<DetailPayload, LoadError> {
        let url = Url::parse(&summary.url).map_err(|e| {
            LoadError::Unexpected(format!(
                "invalid detail url for {}: {} ({e})",
                summary.name, summary.url
            ))
        })?;
        Ok(get_json(&self.client, url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_with_and_without_trailing_slash_agree() {
        let a = normalize_api_base("https://pokeapi.co/api/v2").unwrap();
        let b = normalize_api_base("https://pokeapi.co/api/v2/").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "https://pokeapi.co/api/v2/");
    }

    #[test]
    fn list_url_carries_limit_query() {
        let src =
            HttpCatalogSource::new(Client::new(), "https://pokeapi.co/api/v2", "pokemon").unwrap();
        assert_eq!(
            src.list_url(151).as_str(),
            "https://pokeapi.co/api/v2/pokemon?limit=151"
        );
        assert_eq!(
            src.list_url(3).as_str(),
            "https://pokeapi.co/api/v2/pokemon?limit=3"
        );
    }

    #[test]
    fn invalid_base_is_rejected() {
        let err = HttpCatalogSource::new(Client::new(), "not a url", "pokemon").err();
        assert!(matches!(err, Some(LoadError::Unexpected(_))));
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = HttpCatalogSource::new(Client::new(), "https://pokeapi.co/api/v2", "/").err();
        assert!(matches!(err, Some(LoadError::Unexpected(_))));
    }
}
