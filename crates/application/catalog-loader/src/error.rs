use catalog_infra::FetchError;

/// Why a batch load failed. Either kind fails the whole batch.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    /// The upstream call itself failed: connection, non-2xx status, unreadable body.
    #[error("Network error: {0}")]
    Network(String),
    /// Anything else, most commonly a response that does not have the expected shape.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl LoadError {
    pub fn is_network(&self) -> bool {
        matches!(self, LoadError::Network(_))
    }

    /// Message stored in the view's error state.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(detail) => {
                format!("Could not reach the catalog service ({detail}).")
            }
            LoadError::Unexpected(_) => {
                "Something went wrong while loading the catalog.".to_string()
            }
        }
    }
}

impl From<FetchError> for LoadError {
    fn from(e: FetchError) -> Self {
        if e.is_network() {
            LoadError::Network(e.to_string())
        } else {
            LoadError::Unexpected(e.to_string())
        }
    }
}
