//! rcm-client library - reactive record collection client
//!
//! All view state is derived from one explicit [`Session`] value. Input
//! and asynchronous completions are turned into [`Event`]s, applied by a
//! single update function, and the resulting [`SessionView`] is published
//! to whoever renders it.
//!
//! Data flows one way:
//! input → validators → form validity → submission gate → store → views

pub mod api;
pub mod command;
pub mod filter;
pub mod form;
pub mod render;
pub mod runtime;
pub mod session;
pub mod store;
pub mod submission;
pub mod validators;

pub use api::{FetchError, HttpRecordsClient, RecordsApi, SubmissionError};
pub use form::{FormModel, FormPhase};
pub use rcm_common::Record;
pub use session::{Effect, Event, Session, SessionView};
pub use store::{LoadState, RecordStore};
pub use validators::{Field, FieldStatus};
