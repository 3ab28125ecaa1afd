//! Remote schedule sources

use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::error::SessionError;
use crate::record::SessionRecord;
use crate::Result;

pub const DEFAULT_SESSIONS_URL: &str =
    "https://raw.githubusercontent.com/droidknights/DroidKnights2023_App/main/core/data/src/main/assets/sessions.json";

/// Read-only provider of the full session schedule.
#[async_trait]
pub trait SessionSource: Send + Sync {
    async fn get_sessions(&self) -> Result<Vec<SessionRecord>>;
}

/// Fetches the schedule JSON from a raw static file host.
pub struct GithubRawSource {
    client: reqwest::Client,
    url: Url,
}

impl GithubRawSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| SessionError::RemoteFetch(format!("invalid sessions url {url}: {e}")))?;

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url })
    }
}

#[async_trait]
impl SessionSource for GithubRawSource {
    async fn get_sessions(&self) -> Result<Vec<SessionRecord>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?;

        let records: Vec<SessionRecord> = response.json().await?;

        tracing::debug!(url = %self.url, count = records.len(), "Fetched session records");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> String {
        serde_json::json!([
            {
                "id": "1",
                "title": "Jetpack Compose",
                "content": "",
                "speakers": [{"name": "Kim", "introduction": "", "imageUrl": ""}],
                "level": "BASIC",
                "tags": ["Compose"],
                "room": "TRACK1",
                "startTime": "2023-09-12T11:00:00",
                "endTime": "2023-09-12T11:40:00"
            }
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_fetch_sessions_happy_path() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/sessions.json"))
            .respond_with(
                wiremock::ResponseTemplate::new(200).set_body_raw(body(), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let source = GithubRawSource::new(
            &format!("{}/sessions.json", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let records = source.get_sessions().await.expect("fetch sessions");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Jetpack Compose");
    }

    #[tokio::test]
    async fn test_fetch_sessions_server_error() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(wiremock::ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let source = GithubRawSource::new(
            &format!("{}/sessions.json", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let result = source.get_sessions().await;
        assert!(matches!(result, Err(SessionError::RemoteFetch(_))));
    }

    #[tokio::test]
    async fn test_fetch_sessions_malformed_body() {
        let server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_raw("{\"not\": \"a list\"}", "application/json"),
            )
            .mount(&server)
            .await;

        let source = GithubRawSource::new(&server.uri(), Duration::from_secs(5)).unwrap();
        assert!(matches!(
            source.get_sessions().await,
            Err(SessionError::RemoteFetch(_))
        ));
    }

    #[test]
    fn test_invalid_url() {
        let result = GithubRawSource::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(SessionError::RemoteFetch(_))));
    }
}
