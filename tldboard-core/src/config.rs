use std::path::PathBuf;
use std::time::Duration;
use tldboard_fetch::{AnySource, FileSource, HttpSource, USERS_ENDPOINT, error::FetchError};
use url::Url;

/// Where a run reads its users from and how.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub endpoint: Url,
    /// Offline payload; takes precedence over `endpoint` when set.
    pub input: Option<PathBuf>,
    /// Applied at the fetch boundary only. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(USERS_ENDPOINT).expect("default endpoint is a valid URL"),
            input: None,
            timeout: None,
        }
    }
}

impl BoardConfig {
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn source(&self) -> Result<AnySource, FetchError> {
        match self.input {
            Some(ref path) => Ok(FileSource::new(path).into()),
            None => Ok(HttpSource::with_timeout(self.endpoint.clone(), self.timeout)?.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tldboard_fetch::UserSource;

    #[test]
    fn test_default_endpoint() {
        let config = BoardConfig::default();
        assert_eq!(config.endpoint.as_str(), USERS_ENDPOINT);
        assert!(config.timeout.is_none());
        assert!(config.input.is_none());
    }

    #[test]
    fn test_input_takes_precedence() {
        let config = BoardConfig::default().with_input("/tmp/users.json");
        let source = config.source().unwrap();
        assert!(matches!(source, AnySource::File(_)));
        assert_eq!(source.describe(), "/tmp/users.json");
    }

    #[test]
    fn test_http_source_with_timeout() {
        let endpoint = Url::parse("http://localhost:8080/users").unwrap();
        let config = BoardConfig::default()
            .with_endpoint(endpoint)
            .with_timeout(Duration::from_secs(3));

        match config.source().unwrap() {
            AnySource::Http(source) => {
                assert_eq!(source.endpoint().as_str(), "http://localhost:8080/users");
                assert_eq!(source.timeout(), Some(Duration::from_secs(3)));
            }
            AnySource::File(_) => panic!("expected an HTTP source"),
        }
    }
}
