//! Records API client
//!
//! [`RecordsApi`] is the seam between the session logic and the network:
//! the runtime talks to it, tests substitute an in-memory implementation,
//! and [`HttpRecordsClient`] speaks to an rcm-server over HTTP.

use async_trait::async_trait;
use rcm_common::Record;
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("rcm-client/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The initial `GET /records` did not complete
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned {0}")]
    Status(u16),

    /// Body was not a JSON array of records
    #[error("Malformed record list: {0}")]
    Malformed(String),
}

/// A `POST /records/new` did not produce a record
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Server returned {0}")]
    Status(u16),

    /// Body was not a record
    #[error("Malformed record: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait RecordsApi: Send + Sync {
    /// GET /records
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;

    /// POST /records/new, returning the record as the server stored it
    async fn create_record(&self, candidate: &Record) -> Result<Record, SubmissionError>;
}

/// HTTP implementation over reqwest
#[derive(Debug, Clone)]
pub struct HttpRecordsClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpRecordsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RecordsApi for HttpRecordsClient {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        let url = self.url("/records");
        tracing::debug!(url = %url, "Fetching records");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Record::list_from_json(&bytes).map_err(|e| FetchError::Malformed(e.to_string()))
    }

    async fn create_record(&self, candidate: &Record) -> Result<Record, SubmissionError> {
        let url = self.url("/records/new");
        tracing::debug!(url = %url, album = %candidate.album, "Submitting record");

        let response = self
            .http_client
            .post(&url)
            .json(candidate)
            .send()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| SubmissionError::Malformed(e.to_string()))
    }
}
