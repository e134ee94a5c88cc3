//! Submission pipeline
//!
//! Sends one candidate record and reports the server's answer. Client-side
//! validity is the only gate; there is no retry.

use rcm_common::Record;
use tracing::{info, warn};

use crate::api::{RecordsApi, SubmissionError};

/// Create `candidate` on the server
///
/// On success the returned record is the server's version, which is what
/// gets stored.
pub async fn submit<A>(api: &A, candidate: Record) -> Result<Record, SubmissionError>
where
    A: RecordsApi + ?Sized,
{
    info!(album = %candidate.album, "Submitting record");

    match api.create_record(&candidate).await {
        Ok(created) => {
            info!(album = %created.album, "Record created");
            Ok(created)
        }
        Err(e) => {
            warn!(album = %candidate.album, "Record submission failed: {}", e);
            Err(e)
        }
    }
}
