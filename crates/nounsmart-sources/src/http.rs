//! Noun table fetched over HTTP(S).

use std::time::Duration;

use async_trait::async_trait;
use tracing::instrument;

use nounsmart_core::table::NounTable;
use nounsmart_core::traits::NounSource;

use crate::error::SourceError;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Downloads the CSV once per [`NounSource::load`] call.
pub struct HttpSource {
    url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str, timeout_secs: Option<u64>) -> Result<Self, SourceError> {
        let timeout_secs = timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            url: url.to_string(),
            timeout_secs,
            client,
        })
    }

    async fn fetch(&self) -> Result<String, SourceError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                SourceError::Timeout(self.timeout_secs)
            } else {
                SourceError::Network(e.to_string())
            }
        };

        let response = self.client.get(&self.url).send().await.map_err(map_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        response.text().await.map_err(map_err)
    }
}

#[async_trait]
impl NounSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn location(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn load(&self) -> anyhow::Result<NounTable> {
        let body = self.fetch().await?;
        let table = NounTable::from_csv_str(&body).map_err(SourceError::from)?;
        tracing::info!(rows = table.len(), "loaded noun table");
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nounsmart_core::Level;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CSV: &str = "Singular,Level\nbus,es\n cat , s \ncity,ies\n";

    #[tokio::test]
    async fn successful_load() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/nouns.csv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(CSV))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/nouns.csv", server.uri()), None).unwrap();
        let table = source.load().await.unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.count(Level::S), 1);
        assert_eq!(table.records()[1].singular, "cat");
    }

    #[tokio::test]
    async fn not_found_is_http_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/gone.csv", server.uri()), None).unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::HttpStatus { status: 404, .. })
        ));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn unusable_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let source = HttpSource::new(&server.uri(), None).unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::Parse(_))
        ));
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(CSV)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let source = HttpSource::new(&server.uri(), Some(1)).unwrap();
        let err = source.load().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SourceError>(),
            Some(SourceError::Timeout(1))
        ));
    }
}
