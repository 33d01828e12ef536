use crate::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const USER_AGENT: &str = "tldboard/0.1 (https://github.com/tldboard/tldboard)";

/// Something that can produce the raw JSON payload of a user listing.
///
/// Implementations report every failure as a [`FetchError`]; collapsing
/// those into "no data" is the job of [`crate::fetch_users`].
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Human readable origin, used in diagnostics.
    fn describe(&self) -> String;

    async fn fetch_payload(&self) -> Result<Value>;
}

/// Fetches the payload with a single GET request.
pub struct HttpSource {
    client: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpSource {
    pub fn new(endpoint: Url) -> Result<Self> {
        Self::with_timeout(endpoint, None)
    }

    pub fn parse(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        Self::new(endpoint)
    }

    /// No timeout is applied unless one is given; a hanging server hangs the request.
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5));

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl UserSource for HttpSource {
    fn describe(&self) -> String {
        self.endpoint.to_string()
    }

    async fn fetch_payload(&self) -> Result<Value> {
        debug!("Fetching {}", self.endpoint);

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::StatusError(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes from {}", body.len(), self.endpoint);

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Reads the payload from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl UserSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_payload(&self) -> Result<Value> {
        debug!("Reading {}", self.path.display());
        let body = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Source picked at runtime from command line options.
pub enum AnySource {
    Http(HttpSource),
    File(FileSource),
}

#[async_trait]
impl UserSource for AnySource {
    fn describe(&self) -> String {
        match self {
            AnySource::Http(source) => source.describe(),
            AnySource::File(source) => source.describe(),
        }
    }

    async fn fetch_payload(&self) -> Result<Value> {
        match self {
            AnySource::Http(source) => source.fetch_payload().await,
            AnySource::File(source) => source.fetch_payload().await,
        }
    }
}

impl From<HttpSource> for AnySource {
    fn from(source: HttpSource) -> Self {
        AnySource::Http(source)
    }
}

impl From<FileSource> for AnySource {
    fn from(source: FileSource) -> Self {
        AnySource::File(source)
    }
}
