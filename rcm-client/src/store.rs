//! Client-side record store
//!
//! Holds the records fetched at start-up plus every record created since.
//! The store is append-only: there is no update or delete.

use rcm_common::Record;
use tracing::{info, warn};

use crate::api::{FetchError, RecordsApi};

/// Ordered, append-only collection of records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Add a record after the server confirmed its creation
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Read-only snapshot in insertion order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if some record already uses `album`, ignoring case
    pub fn contains_album(&self, album: &str) -> bool {
        let wanted = album.to_lowercase();
        self.records
            .iter()
            .any(|record| record.album.to_lowercase() == wanted)
    }
}

/// Progress of the one-shot initial fetch
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    /// The fetch failed; the message is shown as a list-level error
    Failed(String),
}

/// Fetch the initial record list
pub async fn load<A>(api: &A) -> Result<Vec<Record>, FetchError>
where
    A: RecordsApi + ?Sized,
{
    match api.fetch_records().await {
        Ok(records) => {
            info!(count = records.len(), "Loaded records");
            Ok(records)
        }
        Err(e) => {
            warn!("Failed to load records: {}", e);
            Err(e)
        }
    }
}
