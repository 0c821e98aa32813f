use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::AssetError;

/// In-flight byte fetch for one path.
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<u8>, AssetError>> + Send>>;

/// Retrieval backend the loader fans out over. Backends own path rooting;
/// the loader hands them already variant-resolved paths.
pub trait AssetFetch: Send + Sync + 'static {
    fn fetch(&self, path: &str) -> FetchFuture;
}

/// HTTP GET backend over a base URL.
pub struct HttpFetch {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetch {
    pub fn new(base_url: impl Into<String>) -> Result<Self, AssetError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AssetError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl AssetFetch for HttpFetch {
    fn fetch(&self, path: &str) -> FetchFuture {
        let url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let client = self.client.clone();
        let label = path.to_string();

        Box::pin(async move {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| AssetError::Fetch(label.clone(), e.to_string()))?
                .error_for_status()
                .map_err(|e| AssetError::Fetch(label.clone(), e.to_string()))?;

            let bytes = response
                .bytes()
                .await
                .map_err(|e| AssetError::Fetch(label, e.to_string()))?;

            Ok(bytes.to_vec())
        })
    }
}

/// In-memory backend for embedded assets and tests. Records every
/// requested path so callers can assert on fetch activity.
#[derive(Default)]
pub struct MemoryFetch {
    entries: HashMap<String, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl MemoryFetch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry registration.
    pub fn with(mut self, path: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.entries.insert(path.into(), bytes);
        self
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: Vec<u8>) {
        self.entries.insert(path.into(), bytes);
    }

    /// Every path fetched so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

impl AssetFetch for MemoryFetch {
    fn fetch(&self, path: &str) -> FetchFuture {
        self.requested.lock().push(path.to_string());
        let result = self
            .entries
            .get(path)
            .cloned()
            .ok_or_else(|| AssetError::Fetch(path.to_string(), "no such entry".into()));
        Box::pin(async move { result })
    }
}

/// Fetch a path expected to hold text. An empty body is a parse error,
/// matching the contract that a text parser never sees nothing.
pub(crate) async fn fetch_text(fetch: &dyn AssetFetch, path: &str) -> Result<String, AssetError> {
    let bytes = fetch.fetch(path).await?;
    if bytes.is_empty() {
        return Err(AssetError::EmptyResponse(path.to_string()));
    }
    String::from_utf8(bytes).map_err(|e| AssetError::Parse(path.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_fetch_returns_registered_bytes() {
        let fetch = MemoryFetch::new().with("a.txt", b"hello".to_vec());
        let bytes = fetch.fetch("a.txt").await.unwrap();
        assert_eq!(bytes, b"hello");
        assert_eq!(fetch.requested(), vec!["a.txt"]);
    }

    #[tokio::test]
    async fn memory_fetch_missing_entry_errors() {
        let fetch = MemoryFetch::new();
        let err = fetch.fetch("missing.png").await.unwrap_err();
        assert!(matches!(err, AssetError::Fetch(_, _)));
    }

    #[tokio::test]
    async fn empty_text_body_is_rejected() {
        let fetch = MemoryFetch::new().with("empty.json", Vec::new());
        let err = fetch_text(&fetch, "empty.json").await.unwrap_err();
        assert!(matches!(err, AssetError::EmptyResponse(_)));
    }

    #[tokio::test]
    async fn text_fetch_decodes_utf8() {
        let fetch = MemoryFetch::new().with("a.json", b"{}".to_vec());
        assert_eq!(fetch_text(&fetch, "a.json").await.unwrap(), "{}");
    }
}
