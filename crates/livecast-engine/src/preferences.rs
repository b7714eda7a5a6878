//! Shared ingestion preferences.
//!
//! The controller copies the stream's CDN endpoint here on session start;
//! the ingest transport reads it when it connects. Persistence is the
//! host's concern, this store is process-local.

use parking_lot::RwLock;
use url::Url;

/// Ingestion endpoint consumed by the ingest transport.
#[derive(Debug, Clone)]
pub struct IngestionEndpoint {
    /// Ingestion URL.
    pub url: Url,

    /// Stream name/key appended to the URL by the ingest client.
    pub stream_name: String,
}

/// Shared store for the active ingestion endpoint.
#[derive(Debug, Default)]
pub struct IngestionPreferences {
    endpoint: RwLock<Option<IngestionEndpoint>>,
}

impl IngestionPreferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an ingestion endpoint.
    pub fn store(&self, address: &str, stream_name: &str) -> Result<(), url::ParseError> {
        let url = Url::parse(address)?;
        *self.endpoint.write() = Some(IngestionEndpoint {
            url,
            stream_name: stream_name.to_string(),
        });
        Ok(())
    }

    /// The currently stored endpoint, if any.
    pub fn endpoint(&self) -> Option<IngestionEndpoint> {
        self.endpoint.read().clone()
    }
}
