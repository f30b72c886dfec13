//! JSON payloads exchanged with the portal backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Server-assigned notification identifier.
pub type NotificationId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One unread notification as listed by the backend.
pub struct Notification {
    /// Unique id, used by the mark-read endpoint.
    pub id: NotificationId,
    /// Display text.
    pub message: String,
    /// Timestamp already formatted for display by the server.
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Body of the unread-notification listing.
///
/// `count` is the server-side unread total; `notifications` is only the page the server chose to
/// send, so the two may disagree.
pub struct NotificationFeed {
    /// Unread total.
    pub count: u32,
    /// Unread notifications in server order.
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Job posting details shown in the job modal.
pub struct JobDetail {
    /// Job id.
    pub id: u64,
    /// Posting title.
    pub title: String,
    /// Hiring company display name.
    pub company: String,
    /// Location text.
    pub location: String,
    /// Free-form description.
    pub description: String,
    /// Optional requirements section.
    #[serde(default)]
    pub requirements: Option<String>,
    /// Optional responsibilities section.
    #[serde(default)]
    pub responsibilities: Option<String>,
    /// Optional salary range text.
    #[serde(default)]
    pub salary_range: Option<String>,
    /// Employment type token (`full_time`, `contract`, ...).
    pub job_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Applicant details shown to admins in the applicant modal.
pub struct ApplicationDetail {
    /// Application id.
    pub id: u64,
    /// Applicant name.
    pub full_name: String,
    /// Applicant email.
    pub email: String,
    /// Applicant phone number.
    pub phone: String,
    /// Optional LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Optional portfolio URL.
    #[serde(default)]
    pub portfolio: Option<String>,
    /// Optional cover letter text.
    #[serde(default)]
    pub cover_letter: Option<String>,
    /// Raw status token; see [`ApplicationStatus`].
    pub status: String,
    /// Title of the job applied for.
    pub job_title: String,
    /// Application date formatted by the server.
    pub applied_date: String,
    /// Resume download URL when a file was uploaded.
    #[serde(default)]
    pub resume_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Review states an application moves through.
pub enum ApplicationStatus {
    /// Freshly submitted.
    New,
    /// Under review.
    Reviewing,
    /// Interview booked.
    InterviewScheduled,
    /// Declined.
    Rejected,
}

impl ApplicationStatus {
    /// Every status, in review order.
    pub const ALL: [Self; 4] = [
        Self::New,
        Self::Reviewing,
        Self::InterviewScheduled,
        Self::Rejected,
    ];

    /// Parses a wire token.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == token.trim())
    }

    /// Returns the wire token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Reviewing => "reviewing",
            Self::InterviewScheduled => "interview_scheduled",
            Self::Rejected => "rejected",
        }
    }

    /// Returns the CSS modifier class the server templates use for this status.
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::New => "badge-new",
            Self::Reviewing => "badge-reviewing",
            Self::InterviewScheduled => "badge-interview",
            Self::Rejected => "badge-rejected",
        }
    }
}

/// Returns the badge modifier class for a raw status token (`badge-default` when unknown).
pub fn status_badge_class(token: &str) -> &'static str {
    ApplicationStatus::parse(token)
        .map(ApplicationStatus::badge_class)
        .unwrap_or("badge-default")
}

/// Title-cases a status token for display: `interview_scheduled` -> `Interview Scheduled`.
pub fn status_label(token: &str) -> String {
    token
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Structured reply of the form endpoints (apply, status update).
pub struct FormSubmissionReply {
    /// Whether the server accepted the submission.
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
    /// Field validation errors keyed by field name.
    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// Returns `Some` for a present, non-blank optional text field.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn feed_decodes_with_missing_list() {
        let feed: NotificationFeed = serde_json::from_value(json!({ "count": 2 })).expect("feed");
        assert_eq!(feed.count, 2);
        assert!(feed.notifications.is_empty());
    }

    #[test]
    fn feed_rejects_negative_count() {
        let decoded = serde_json::from_value::<NotificationFeed>(json!({
            "count": -1,
            "notifications": []
        }));
        assert!(decoded.is_err());
    }

    #[test]
    fn status_badges_follow_server_template_classes() {
        assert_eq!(status_badge_class("new"), "badge-new");
        assert_eq!(status_badge_class("interview_scheduled"), "badge-interview");
        assert_eq!(status_badge_class("archived"), "badge-default");
        assert_eq!(
            ApplicationStatus::parse("reviewing"),
            Some(ApplicationStatus::Reviewing)
        );
    }

    #[test]
    fn status_tokens_parse_back_to_their_status() {
        for status in ApplicationStatus::ALL {
            assert_eq!(ApplicationStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(ApplicationStatus::parse(" rejected "), Some(ApplicationStatus::Rejected));
        assert_eq!(ApplicationStatus::parse("Rejected"), None);
    }

    #[test]
    fn status_labels_are_title_cased() {
        assert_eq!(status_label("interview_scheduled"), "Interview Scheduled");
        assert_eq!(status_label("new"), "New");
        assert_eq!(status_label(""), "");
    }

    #[test]
    fn job_detail_tolerates_null_optional_sections() {
        let job: JobDetail = serde_json::from_value(json!({
            "id": 7,
            "title": "Backend Engineer",
            "company": "Acme",
            "location": "Remote",
            "description": "Build things",
            "requirements": null,
            "responsibilities": "",
            "job_type": "full_time"
        }))
        .expect("job");
        assert_eq!(non_blank(&job.requirements), None);
        assert_eq!(non_blank(&job.responsibilities), None);
        assert_eq!(job.salary_range, None);
    }
}
