//! Form model
//!
//! Tracks the four field values and their validity, and derives the form
//! phase:
//!
//! ```text
//! Incomplete ──all valid──▶ Submittable ──submit──▶ Submitting
//!     ▲                          ▲                      │
//!     └──────── success ─────────┼──────────────────────┤
//!               (cleared)        └── failure (kept) ────┘
//! ```
//!
//! Submitting while `Incomplete` or `Submitting` does nothing.

use rcm_common::Record;
use tracing::debug;

use crate::store::RecordStore;
use crate::validators::{Field, FieldStatus};

/// Current value and validity of one field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub valid: bool,
}

impl FieldState {
    pub fn status(&self) -> FieldStatus {
        FieldStatus::derive(&self.value, self.valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// At least one field empty or invalid
    Incomplete,
    /// All fields valid, nothing in flight
    Submittable,
    /// A create request is in flight
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormModel {
    fields: [FieldState; 4],
    in_flight: bool,
    error: bool,
}

impl FormModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new raw value and revalidate that field
    pub fn set_value(&mut self, field: Field, value: impl Into<String>, store: &RecordStore) {
        let value = value.into();
        let valid = field.validate(&value, store);
        self.fields[field.index()] = FieldState { value, valid };
    }

    /// Recompute every field against the current store
    ///
    /// Needed whenever the store grows: an album typed before a matching
    /// record arrived must flip to invalid.
    pub fn revalidate(&mut self, store: &RecordStore) {
        for field in Field::ALL {
            let state = &mut self.fields[field.index()];
            state.valid = field.validate(&state.value, store);
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        self.field(field).status()
    }

    pub fn all_valid(&self) -> bool {
        self.fields.iter().all(|state| state.valid)
    }

    pub fn phase(&self) -> FormPhase {
        if self.in_flight {
            FormPhase::Submitting
        } else if self.all_valid() {
            FormPhase::Submittable
        } else {
            FormPhase::Incomplete
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase() == FormPhase::Submittable
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn clear_error(&mut self) {
        self.error = false;
    }

    /// Current values as a candidate record
    pub fn candidate(&self) -> Record {
        Record::new(
            self.value(Field::Album),
            self.value(Field::Artist),
            self.value(Field::Year),
            self.value(Field::Genre),
        )
    }

    /// Enter `Submitting` and hand back the candidate
    ///
    /// Returns `None`, changing nothing, unless the form is `Submittable`.
    pub fn begin_submission(&mut self) -> Option<Record> {
        if !self.can_submit() {
            debug!(phase = ?self.phase(), "Submit ignored");
            return None;
        }

        self.in_flight = true;
        self.error = false;
        Some(self.candidate())
    }

    /// The record was created: clear everything
    pub fn submission_succeeded(&mut self, store: &RecordStore) {
        self.in_flight = false;
        self.error = false;
        for field in Field::ALL {
            self.set_value(field, String::new(), store);
        }
    }

    /// The create request failed: keep the values, raise the error flag
    pub fn submission_failed(&mut self) {
        self.in_flight = false;
        self.error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut FormModel, store: &RecordStore) {
        form.set_value(Field::Album, "X", store);
        form.set_value(Field::Artist, "Y", store);
        form.set_value(Field::Year, "2020", store);
        form.set_value(Field::Genre, "Rock", store);
    }

    #[test]
    fn test_new_form_is_incomplete() {
        let form = FormModel::new();
        assert_eq!(form.phase(), FormPhase::Incomplete);
        for field in Field::ALL {
            assert_eq!(form.status(field), FieldStatus::Empty);
        }
    }

    #[test]
    fn test_all_valid_is_submittable() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        assert_eq!(form.phase(), FormPhase::Submittable);
        assert!(form.can_submit());
    }

    #[test]
    fn test_emptying_a_field_makes_incomplete() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        form.set_value(Field::Genre, "", &store);
        assert_eq!(form.phase(), FormPhase::Incomplete);
        assert_eq!(form.status(Field::Genre), FieldStatus::Empty);
    }

    #[test]
    fn test_invalid_year_makes_incomplete() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        form.set_value(Field::Year, "20", &store);
        assert_eq!(form.phase(), FormPhase::Incomplete);
        assert_eq!(form.status(Field::Year), FieldStatus::Invalid);
    }

    #[test]
    fn test_submit_is_inert_when_incomplete() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        form.set_value(Field::Album, "X", &store);

        let before = form.clone();
        assert!(form.begin_submission().is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn test_submit_is_inert_while_submitting() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        let candidate = form.begin_submission().unwrap();
        assert_eq!(candidate, Record::new("X", "Y", "2020", "Rock"));
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert!(form.begin_submission().is_none());
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_success_clears_form() {
        let mut store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        let candidate = form.begin_submission().unwrap();
        store.append(candidate);
        form.submission_succeeded(&store);

        assert_eq!(form.phase(), FormPhase::Incomplete);
        assert!(!form.has_error());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_failure_keeps_values_and_raises_error() {
        let store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);

        form.begin_submission().unwrap();
        form.submission_failed();

        assert!(form.has_error());
        assert_eq!(form.phase(), FormPhase::Submittable);
        assert_eq!(form.candidate(), Record::new("X", "Y", "2020", "Rock"));

        // Retrying clears the flag
        form.begin_submission().unwrap();
        assert!(!form.has_error());
    }

    #[test]
    fn test_revalidate_flips_stale_album() {
        let mut store = RecordStore::new();
        let mut form = FormModel::new();
        fill(&mut form, &store);
        assert!(form.can_submit());

        store.append(Record::new("x", "Someone", "1999", "Pop"));
        form.revalidate(&store);

        assert_eq!(form.status(Field::Album), FieldStatus::Invalid);
        assert_eq!(form.phase(), FormPhase::Incomplete);
    }
}
