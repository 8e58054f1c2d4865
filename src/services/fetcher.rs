use log::debug;
use reqwest::Client;
use serde_json::Value;

use crate::models::report::{error_message, ReportPayload};

use super::{errors::ReportError, shared::constants::DATA_PATH};

/// Client for the backend's report endpoint.
#[derive(Debug, Clone)]
pub struct DataFetcher {
    client: Client,
    endpoint: String,
}

impl DataFetcher {
    pub fn new(base_url: &str) -> Self {
        DataFetcher {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), DATA_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues a single GET and parses the body.
    ///
    /// The status code is not inspected. A body carrying an `error` field
    /// fails with [`ReportError::Payload`] before its shape is looked at.
    pub async fn fetch(&self) -> Result<ReportPayload, ReportError> {
        debug!("Fetching report data from {}", self.endpoint);
        let body = self.client.get(&self.endpoint).send().await?.text().await?;

        let body: Value = serde_json::from_str(&body)?;
        if let Some(message) = error_message(&body) {
            return Err(ReportError::Payload(message));
        }

        Ok(serde_json::from_value(body)?)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{spawn_backend, unreachable_backend};
    use super::*;
    use crate::services::errors::ErrorKind;

    #[test]
    fn test_endpoint() {
        let fetcher = DataFetcher::new("http://127.0.0.1:5001/");
        assert_eq!(fetcher.endpoint(), "http://127.0.0.1:5001/api/data");
    }

    #[tokio::test]
    async fn test_fetch_payload() {
        let base_url = spawn_backend(
            r#"{"months": ["April 2025"], "records": [{"Name": "Total", "ISIN": "", "Rating": "", "Months": {"April 2025": {"Quantity": 1, "Value": 2.5, "Pct": 1}}}]}"#,
        )
        .await;

        let payload = DataFetcher::new(&base_url).fetch().await.unwrap();
        assert_eq!(payload.months, vec!["April 2025"]);
        assert_eq!(payload.records.len(), 1);
        assert!(payload.records[0].is_total());
    }

    #[tokio::test]
    async fn test_fetch_error_field() {
        let base_url = spawn_backend(r#"{"error": "Excel file not found. Please run aggregator first."}"#).await;

        let err = DataFetcher::new(&base_url).fetch().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Payload);
        assert_eq!(err.to_string(), "Excel file not found. Please run aggregator first.");
    }

    #[tokio::test]
    async fn test_error_field_wins_over_shape() {
        let base_url = spawn_backend(r#"{"error": "boom", "records": 42}"#).await;

        let err = DataFetcher::new(&base_url).fetch().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Payload);
    }

    #[tokio::test]
    async fn test_fetch_non_json() {
        let base_url = spawn_backend("<html>Internal Server Error</html>").await;

        let err = DataFetcher::new(&base_url).fetch().await.unwrap_err();
        assert!(matches!(err, ReportError::Decode(_)));
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload() {
        let base_url = spawn_backend(r#"{"months": "January", "records": []}"#).await;

        let err = DataFetcher::new(&base_url).fetch().await.unwrap_err();
        assert!(matches!(err, ReportError::Decode(_)));
    }

    #[tokio::test]
    async fn test_fetch_unreachable() {
        let base_url = unreachable_backend().await;

        let err = DataFetcher::new(&base_url).fetch().await.unwrap_err();
        assert!(matches!(err, ReportError::Transport(_)));
        assert_eq!(err.kind(), ErrorKind::Fetch);
    }
}
