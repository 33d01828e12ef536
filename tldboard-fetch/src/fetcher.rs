use crate::source::UserSource;
use serde_json::Value;
use tracing::{info, warn};

/// Fetch the user payload, collapsing every failure into an empty array.
///
/// Transport errors, non-2xx statuses and undecodable bodies are logged and
/// never reach the caller. The payload shape is not checked here; the
/// grouper decides what to do with a body that is not an array.
pub async fn fetch_users<S: UserSource>(source: &S) -> Value {
    match source.fetch_payload().await {
        Ok(payload) => {
            info!("Fetched user payload from {}", source.describe());
            payload
        }
        Err(e) => {
            warn!("Failed to fetch users from {}: {}", source.describe(), e);
            Value::Array(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::source::{AnySource, FileSource, HttpSource};
    use serde_json::json;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;
    use url::Url;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn users_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    fn users_source(server: &MockServer) -> HttpSource {
        HttpSource::parse(&format!("{}/users", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_users_returns_body() {
        let body = json!([{ "id": 1, "name": "John Doe" }]);
        let server = users_server(ResponseTemplate::new(200).set_body_json(&body)).await;

        let payload = fetch_users(&users_source(&server)).await;

        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn test_fetch_users_not_found_is_empty() {
        let server = users_server(ResponseTemplate::new(404).set_body_json(json!([]))).await;

        let source = users_source(&server);
        let err = source.fetch_payload().await.unwrap_err();
        assert!(matches!(err, FetchError::StatusError(404)));

        assert_eq!(fetch_users(&source).await, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_users_server_error_is_empty() {
        let server = users_server(ResponseTemplate::new(503)).await;

        assert_eq!(fetch_users(&users_source(&server)).await, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_users_invalid_json_is_empty() {
        let server = users_server(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string("[{\"name\": "),
        )
        .await;

        let source = users_source(&server);
        let err = source.fetch_payload().await.unwrap_err();
        assert!(matches!(err, FetchError::DecodeError(_)));

        assert_eq!(fetch_users(&source).await, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_users_network_error_is_empty() {
        // Nothing listens on the discard port
        let source = HttpSource::parse("http://127.0.0.1:9/users").unwrap();

        let err = source.fetch_payload().await.unwrap_err();
        assert!(matches!(err, FetchError::HttpError(_)));

        assert_eq!(fetch_users(&source).await, json!([]));
    }

    #[tokio::test]
    async fn test_fetch_users_non_array_body_passes_through() {
        let body = json!({ "users": [] });
        let server = users_server(ResponseTemplate::new(200).set_body_json(&body)).await;

        assert_eq!(fetch_users(&users_source(&server)).await, body);
    }

    #[tokio::test]
    async fn test_fetch_users_timeout_is_empty() {
        let server = users_server(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_millis(500)),
        )
        .await;

        let endpoint = Url::parse(&format!("{}/users", server.uri())).unwrap();
        let source =
            HttpSource::with_timeout(endpoint, Some(Duration::from_millis(50))).unwrap();
        assert_eq!(source.timeout(), Some(Duration::from_millis(50)));

        let err = source.fetch_payload().await.unwrap_err();
        assert!(matches!(err, FetchError::HttpError(_)));
    }

    #[test]
    fn test_http_source_invalid_url() {
        let result = HttpSource::parse("not a url");
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_file_source_reads_payload() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"[{{"name": "Leanne Graham", "website": "hildegard.org"}}]"#).unwrap();

        let source = AnySource::from(FileSource::new(temp_file.path()));
        let payload = fetch_users(&source).await;

        assert_eq!(payload[0]["website"], "hildegard.org");
        assert_eq!(source.describe(), temp_file.path().display().to_string());
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("users.json"));

        let err = source.fetch_payload().await.unwrap_err();
        assert!(matches!(err, FetchError::IoError(_)));

        assert_eq!(fetch_users(&source).await, json!([]));
    }
}
