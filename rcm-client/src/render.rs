//! Plain-text rendering of a session view

use rcm_common::Record;

use crate::form::FormPhase;
use crate::session::SessionView;
use crate::validators::FieldStatus;

pub const LIST_ERROR_TEXT: &str = "Failed to get records from server";
pub const FORM_ERROR_TEXT: &str = "Failed to add record, please try again";

/// The record list, one block per record
pub fn render_records(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| {
            format!(
                "{}\n    Artist: {}\n    Year: {}\n    Genre: {}\n",
                record.album, record.artist, record.year, record.genre
            )
        })
        .collect()
}

pub fn status_marker(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Empty => "*",
        FieldStatus::Valid => "ok",
        FieldStatus::Invalid => "!!",
    }
}

/// Form fields with status markers, the submit state and any error
pub fn render_form(view: &SessionView) -> String {
    let mut out = String::new();

    for field in &view.fields {
        out.push_str(&format!(
            "  [{:>2}] {:<7} {}\n",
            status_marker(field.status),
            field.field.name(),
            field.value
        ));
    }

    let submit = match view.phase {
        FormPhase::Submitting => "[submit] (sending...)",
        _ if view.can_submit => "[submit]",
        _ => "[submit] (disabled)",
    };
    out.push_str(&format!("  {}\n", submit));

    if view.form_error {
        out.push_str(&format!("  {}\n", FORM_ERROR_TEXT));
    }

    out
}

/// The whole screen
pub fn render(view: &SessionView) -> String {
    let mut out = String::from("== Records ==\n");

    if view.loading {
        out.push_str("Loading records...\n");
    }
    if let Some(message) = &view.list_error {
        out.push_str(&format!("{} ({})\n", LIST_ERROR_TEXT, message));
    }
    if !view.filter.is_empty() {
        out.push_str(&format!(
            "Filter: {} ({} of {})\n",
            view.filter,
            view.records.len(),
            view.total_records
        ));
    }
    out.push_str(&render_records(&view.records));

    out.push_str("== Add record ==\n");
    out.push_str(&render_form(view));

    out
}
