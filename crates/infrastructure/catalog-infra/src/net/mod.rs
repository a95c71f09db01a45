use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

const USER_AGENT: &str = concat!("catalog-browser/", env!("CARGO_PKG_VERSION"));

/// Failure of a single JSON GET.
///
/// Everything except [`FetchError::Decode`] is a transport-level problem: the request never
/// produced a usable body.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: StatusCode },
    #[error("reading body of {url} failed: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response shape from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        !matches!(self, FetchError::Decode { .. })
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. }
            | FetchError::Decode { url, .. } => url,
        }
    }
}

/// Shared client for every upstream call. No request timeout is configured.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .brotli(true)
        .build()
}

/// GET `url` and decode the body as JSON. Non-2xx statuses are errors.
pub async fn get_json<T: DeserializeOwned>(client: &Client, url: Url) -> Result<T, FetchError> {
    let url_str = url.to_string();
    debug!("GET {url_str}");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url_str.clone(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url_str,
            status,
        });
    }

    let bytes = resp.bytes().await.map_err(|source| FetchError::Body {
        url: url_str.clone(),
        source,
    })?;

    serde_json::from_slice(&bytes).map_err(|source| FetchError::Decode {
        url: url_str,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode as AxumStatus;
    use axum::{routing::get, Router};
    use serde::Deserialize;
    use std::net::SocketAddr;

    #[derive(Debug, Deserialize)]
    struct Ping {
        ok: bool,
    }

    async fn start_server() -> SocketAddr {
        let app = Router::new()
            .route("/ok", get(|| async { r#"{"ok": true}"# }))
            .route("/bad-shape", get(|| async { r#"{"ok": "yes"}"# }))
            .route("/missing", get(|| async { (AxumStatus::NOT_FOUND, "nope") }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn decodes_successful_body() {
        let addr = start_server().await;
        let client = default_http_client().unwrap();
        let url = Url::parse(&format!("http://{addr}/ok")).unwrap();

        let ping: Ping = get_json(&client, url).await.unwrap();
        assert!(ping.ok);
    }

    #[tokio::test]
    async fn non_success_status_is_a_network_error() {
        let addr = start_server().await;
        let client = default_http_client().unwrap();
        let url = Url::parse(&format!("http://{addr}/missing")).unwrap();

        let err = get_json::<Ping>(&client, url).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND));
        assert!(err.is_network());
        assert!(err.url().ends_with("/missing"));
    }

    #[tokio::test]
    async fn wrong_shape_is_a_decode_error() {
        let addr = start_server().await;
        let client = default_http_client().unwrap();
        let url = Url::parse(&format!("http://{addr}/bad-shape")).unwrap();

        let err = get_json::<Ping>(&client, url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = default_http_client().unwrap();
        let url = Url::parse(&format!("http://{addr}/ok")).unwrap();

        let err = get_json::<Ping>(&client, url).await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
