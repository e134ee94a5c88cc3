//! Session state and the single update function
//!
//! Everything the UI shows is derived from a [`Session`]. Inputs and async
//! completions arrive as [`Event`]s; [`Session::update`] applies one event
//! and may ask the runtime to perform an [`Effect`]. [`Session::view`]
//! derives the complete picture to render.

use rcm_common::Record;
use std::time::Duration;
use tracing::{debug, warn};

use crate::api::{FetchError, SubmissionError};
use crate::filter::RecordFilter;
use crate::form::{FormModel, FormPhase};
use crate::store::{LoadState, RecordStore};
use crate::validators::{Field, FieldStatus};

/// How long a submission error stays visible
pub const FORM_ERROR_DISPLAY: Duration = Duration::from_secs(3);

/// Something that happened
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The initial fetch finished
    RecordsLoaded(Result<Vec<Record>, FetchError>),
    /// A form field's raw value changed
    FieldEdited(Field, String),
    /// The filter box changed
    FilterEdited(String),
    SubmitPressed,
    /// A create request finished
    SubmissionCompleted(Result<Record, SubmissionError>),
    /// Hide the submission error raised by failure number `n`
    ErrorDismissed(u64),
}

/// Work the runtime must do on the session's behalf
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send this candidate to the server
    Submit(Record),
    /// Post `ErrorDismissed(generation)` after `after`
    DismissError { generation: u64, after: Duration },
}

#[derive(Debug, Clone)]
pub struct Session {
    store: RecordStore,
    load_state: LoadState,
    form: FormModel,
    filter_text: String,
    filter: RecordFilter,
    error_generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
            load_state: LoadState::Loading,
            form: FormModel::new(),
            filter_text: String::new(),
            filter: RecordFilter::All,
            error_generation: 0,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn form(&self) -> &FormModel {
        &self.form
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// The form is submittable and the initial fetch has settled
    ///
    /// Album uniqueness can only be judged against the fetched records, so
    /// nothing is sent while they are still loading.
    pub fn can_submit(&self) -> bool {
        self.load_state != LoadState::Loading && self.form.can_submit()
    }

    /// Apply one event
    pub fn update(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::RecordsLoaded(result) => {
                self.records_loaded(result);
                None
            }
            Event::FieldEdited(field, value) => {
                self.form.set_value(field, value, &self.store);
                None
            }
            Event::FilterEdited(text) => {
                self.filter = RecordFilter::new(&text);
                self.filter_text = text;
                None
            }
            Event::SubmitPressed => {
                if !self.can_submit() {
                    debug!(load_state = ?self.load_state, "Submit ignored");
                    return None;
                }
                self.form.begin_submission().map(Effect::Submit)
            }
            Event::SubmissionCompleted(result) => self.submission_completed(result),
            Event::ErrorDismissed(generation) => {
                if generation == self.error_generation {
                    self.form.clear_error();
                }
                None
            }
        }
    }

    fn records_loaded(&mut self, result: Result<Vec<Record>, FetchError>) {
        if self.load_state != LoadState::Loading {
            warn!("Ignoring repeated record load");
            return;
        }

        match result {
            Ok(records) => {
                self.store = RecordStore::from_records(records);
                self.load_state = LoadState::Ready;
                self.form.revalidate(&self.store);
            }
            Err(e) => {
                self.load_state = LoadState::Failed(e.to_string());
            }
        }
    }

    fn submission_completed(&mut self, result: Result<Record, SubmissionError>) -> Option<Effect> {
        if self.form.phase() != FormPhase::Submitting {
            warn!("Ignoring submission result with no submission in flight");
            return None;
        }

        match result {
            Ok(record) => {
                debug!(album = %record.album, "Appending created record");
                self.store.append(record);
                self.form.submission_succeeded(&self.store);
                None
            }
            Err(_) => {
                self.form.submission_failed();
                self.error_generation += 1;
                Some(Effect::DismissError {
                    generation: self.error_generation,
                    after: FORM_ERROR_DISPLAY,
                })
            }
        }
    }

    /// Derive everything there is to render
    pub fn view(&self) -> SessionView {
        SessionView {
            records: self.filter.apply(self.store.all()),
            total_records: self.store.len(),
            filter: self.filter_text.clone(),
            loading: self.load_state == LoadState::Loading,
            list_error: match &self.load_state {
                LoadState::Failed(message) => Some(message.clone()),
                _ => None,
            },
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView {
                    field,
                    value: self.form.value(field).to_string(),
                    status: self.form.status(field),
                })
                .collect(),
            phase: self.form.phase(),
            can_submit: self.can_submit(),
            form_error: self.form.has_error(),
        }
    }
}

/// One form field as displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    pub status: FieldStatus,
}

/// Snapshot of everything derived from a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    /// Store records passing the filter, in store order
    pub records: Vec<Record>,
    pub total_records: usize,
    pub filter: String,
    /// Initial fetch still in flight
    pub loading: bool,
    /// Initial fetch failed
    pub list_error: Option<String>,
    pub fields: Vec<FieldView>,
    pub phase: FormPhase,
    /// Submittable and the initial fetch has settled
    pub can_submit: bool,
    /// Last submission failed
    pub form_error: bool,
}

impl SessionView {
    pub fn submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn field(&self, field: Field) -> &FieldView {
        &self.fields[field.index()]
    }
}
