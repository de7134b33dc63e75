//! Blocking HTTP client for NASA's NeoWs REST API.

use std::time::Duration;

use url::Url;

use super::{DateRange, NearEarthObject, NeoSource, NetworkError, parse_feed};

/// NeoWs client bound to one API endpoint and key.
#[derive(Clone)]
pub struct NeoWsClient {
    client: reqwest::blocking::Client,
    api_url: Url,
    api_key: String,
}

impl NeoWsClient {
    pub fn new(
        api_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NetworkError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            api_url: Url::parse(api_url)?,
            api_key: api_key.into(),
        })
    }

    /// URL of the `/feed` endpoint for the given window.
    pub fn feed_url(&self, range: &DateRange) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("feed");
        }
        url.query_pairs_mut()
            .append_pair("start_date", &range.start_date())
            .append_pair("end_date", &range.end_date())
            .append_pair("api_key", &self.api_key);
        url
    }
}

impl NeoSource for NeoWsClient {
    fn fetch_approaching_bodies(
        &self,
        range: &DateRange,
    ) -> Result<Vec<NearEarthObject>, NetworkError> {
        let response = self.client.get(self.feed_url(range)).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                code: status.as_u16(),
            });
        }

        parse_feed(&response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_query() {
        let client = NeoWsClient::new(
            "https://api.nasa.gov/neo/rest/v1",
            "DEMO_KEY",
            Duration::from_secs(5),
        )
        .unwrap();
        // 2024-01-01T00:00:00Z
        let url = client.feed_url(&DateRange::week_starting(1_704_067_200));
        assert_eq!(url.path(), "/neo/rest/v1/feed");
        assert_eq!(
            url.query(),
            Some("start_date=2024-01-01&end_date=2024-01-08&api_key=DEMO_KEY")
        );
    }

    #[test]
    fn test_trailing_slash_base() {
        let client = NeoWsClient::new(
            "https://api.nasa.gov/neo/rest/v1/",
            "k",
            Duration::from_secs(5),
        )
        .unwrap();
        let url = client.feed_url(&DateRange::week_starting(0));
        assert_eq!(url.path(), "/neo/rest/v1/feed");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let result = NeoWsClient::new("not a url", "k", Duration::from_secs(5));
        assert!(matches!(result, Err(NetworkError::Url(_))));
    }
}
