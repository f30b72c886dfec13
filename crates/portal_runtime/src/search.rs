//! Case-insensitive substring filtering over server-rendered rows.

use leptos::*;
use portal_host_web::{dom, RowFields};

use crate::events::event_within;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A set of filterable rows and how to read their searchable text.
pub struct RowFilter {
    /// Selector matching every row.
    pub row_selector: &'static str,
    /// Searchable fields of one row.
    pub fields: RowFields,
    /// `display` value restored on matching rows.
    pub shown_display: &'static str,
}

/// Job cards on the listing page.
pub const JOB_CARDS: RowFilter = RowFilter {
    row_selector: ".job-card",
    fields: RowFields::Selectors(&[".job-title", ".company-name", ".job-location"]),
    shown_display: "block",
};

/// Applicant table rows on the admin page (name, job, email cells).
pub const APPLICANT_ROWS: RowFilter = RowFilter {
    row_selector: ".applicant-row",
    fields: RowFields::LeadingCells(3),
    shown_display: "",
};

const JOB_SEARCH_ID: &str = "jobSearch";
const APPLICANT_SEARCH_ID: &str = "searchInput";

/// Returns whether any field contains `query`, ignoring case.
pub fn row_matches(fields: &[String], query: &str) -> bool {
    let needle = query.to_lowercase();
    needle.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
}

/// Computes per-row visibility for `query`.
pub fn visibility(rows: &[Vec<String>], query: &str) -> Vec<bool> {
    rows.iter().map(|fields| row_matches(fields, query)).collect()
}

/// Returns the query an explicit search submits, or `None` when it should be ignored.
pub fn submitted_query(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|query| !query.is_empty())
}

impl RowFilter {
    /// Shows the rows matching `query` and hides the rest.
    pub fn apply(&self, query: &str) {
        let rows = dom::row_texts(self.row_selector, self.fields);
        dom::set_rows_visible(
            self.row_selector,
            &visibility(&rows, query),
            self.shown_display,
        );
    }
}

/// Wires the job search box and the applicant search box for the current reactive owner.
///
/// Either box may be absent from the page.
pub fn install_row_filters() {
    let input_listener = window_event_listener(ev::input, move |ev| {
        if event_within(&ev, &format!("#{JOB_SEARCH_ID}")) {
            JOB_CARDS.apply(&dom::input_value(JOB_SEARCH_ID).unwrap_or_default());
        } else if event_within(&ev, &format!("#{APPLICANT_SEARCH_ID}")) {
            APPLICANT_ROWS.apply(&dom::input_value(APPLICANT_SEARCH_ID).unwrap_or_default());
        }
    });
    on_cleanup(move || input_listener.remove());

    let enter_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Enter" && event_within(&ev, &format!("#{JOB_SEARCH_ID}")) {
            submit_job_search();
        }
    });
    on_cleanup(move || enter_listener.remove());

    let button_listener = window_event_listener(ev::click, move |ev| {
        if event_within(&ev, ".search-btn") {
            submit_job_search();
        }
    });
    on_cleanup(move || button_listener.remove());
}

fn submit_job_search() {
    let raw = dom::input_value(JOB_SEARCH_ID).unwrap_or_default();
    if let Some(query) = submitted_query(&raw) {
        JOB_CARDS.apply(query);
    }
}
