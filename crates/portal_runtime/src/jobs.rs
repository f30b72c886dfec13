//! Job listing page: job details modal and application form.

use std::{cell::Cell, rc::Rc};

use leptos::*;
use portal_host::{
    fetch_json, non_blank, read_json_any_status, FormSubmissionReply, HttpBody, HttpRequest,
    JobDetail, PortalServices,
};
use portal_host_web::dom;

use crate::{
    error::PortalError,
    events::{event_within, PageAction},
};

const JOB_MODAL_ID: &str = "jobModal";
const APPLICATION_MODAL_ID: &str = "applicationModal";
const APPLICATION_FORM_ID: &str = "applicationForm";
const SUBMIT_BUTTON_ID: &str = "submitApplicationBtn";
const AUTHENTICATED_MARKER: &str = "[data-user-authenticated]";

const SALARY_FALLBACK: &str = "Not specified";
const SUBMIT_IDLE_LABEL: &str = "Submit Application";
const SUBMIT_BUSY_LABEL: &str = "Submitting...";

/// Alert shown when the job modal cannot be loaded.
pub const JOB_LOAD_FAILED: &str = "Failed to load job details. Please try again.";
/// Alert shown after a successful application.
pub const APPLICATION_SUBMITTED: &str = "Application submitted successfully!";
/// Alert shown when the application request itself fails.
pub const APPLICATION_REQUEST_FAILED: &str =
    "An error occurred while submitting your application. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text written into the job modal.
pub struct JobModalContent {
    /// `#modalJobTitle`.
    pub title: String,
    /// `#modalCompany`.
    pub company: String,
    /// `#modalLocation`.
    pub location: String,
    /// `#modalJobType`.
    pub job_type: String,
    /// `#modalSalary`.
    pub salary: String,
    /// `#modalDescription`.
    pub description: String,
    /// `#modalRequirements`; `None` hides `#requirementsSection`.
    pub requirements: Option<String>,
    /// `#modalResponsibilities`; `None` hides `#responsibilitiesSection`.
    pub responsibilities: Option<String>,
}

impl From<&JobDetail> for JobModalContent {
    fn from(job: &JobDetail) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: non_blank(&job.salary_range)
                .unwrap_or(SALARY_FALLBACK)
                .to_string(),
            description: job.description.clone(),
            requirements: non_blank(&job.requirements).map(str::to_string),
            responsibilities: non_blank(&job.responsibilities).map(str::to_string),
        }
    }
}

impl JobModalContent {
    fn write_to_page(&self) {
        dom::set_text("modalJobTitle", &self.title);
        dom::set_text("modalCompany", &self.company);
        dom::set_text("modalLocation", &self.location);
        dom::set_text("modalJobType", &self.job_type);
        dom::set_text("modalSalary", &self.salary);
        dom::set_text("modalDescription", &self.description);
        write_optional_section(
            "modalRequirements",
            "requirementsSection",
            self.requirements.as_deref(),
        );
        write_optional_section(
            "modalResponsibilities",
            "responsibilitiesSection",
            self.responsibilities.as_deref(),
        );
    }
}

fn write_optional_section(text_id: &str, section_id: &str, text: Option<&str>) {
    match text {
        Some(text) => {
            dom::set_text(text_id, text);
            dom::set_display(section_id, "block");
        }
        None => dom::set_display(section_id, "none"),
    }
}

/// Builds the alert for a rejected application.
///
/// Field errors take precedence over the server message; fields are listed alphabetically.
pub fn application_failure_message(reply: &FormSubmissionReply) -> String {
    if let Some(errors) = &reply.errors {
        let mut message = String::from("Failed to submit application:\n");
        for (field, messages) in errors {
            message.push_str(&format!("{field}: {}\n", messages.join(", ")));
        }
        return message;
    }
    reply
        .message
        .clone()
        .unwrap_or_else(|| "Failed to submit application:\n".to_string())
}

/// Owns the job selection for one job listing page.
pub struct JobsPage {
    services: PortalServices,
    current_job: Cell<Option<u64>>,
}

impl JobsPage {
    /// Creates a page controller with no job selected.
    pub fn new(services: PortalServices) -> Self {
        Self {
            services,
            current_job: Cell::new(None),
        }
    }

    /// Returns the selected job.
    pub fn current_job(&self) -> Option<u64> {
        self.current_job.get()
    }

    /// Selects `job_id`, loads its details into the job modal, and shows it.
    ///
    /// # Errors
    ///
    /// Returns the request failure; the modal stays hidden.
    pub async fn open_job(&self, job_id: u64) -> Result<JobDetail, PortalError> {
        self.current_job.set(Some(job_id));
        let request = HttpRequest::get(self.services.routes().job_detail(job_id));
        let job: JobDetail = fetch_json(self.services.http().as_ref(), request).await?;
        JobModalContent::from(&job).write_to_page();
        dom::add_class(JOB_MODAL_ID, "show");
        Ok(job)
    }

    /// Hides the job modal.
    pub fn close_job_modal(&self) {
        dom::remove_class(JOB_MODAL_ID, "show");
    }

    /// Swaps the job modal for the application modal, or sends anonymous visitors to log in.
    pub fn open_application_modal(&self) {
        self.close_job_modal();
        if !dom::element_exists(AUTHENTICATED_MARKER) {
            dom::navigate(&self.services.config().login_redirect(&dom::current_path()));
            return;
        }
        dom::add_class(APPLICATION_MODAL_ID, "show");
        let title = dom::text_of("modalJobTitle").unwrap_or_default();
        dom::set_text("appJobTitle", &title);
    }

    /// Hides the application modal.
    pub fn close_application_modal(&self) {
        dom::remove_class(APPLICATION_MODAL_ID, "show");
    }

    /// Posts `#applicationForm` for the selected job.
    ///
    /// The submit button is disabled for the duration of the request. A `success: false` reply
    /// is returned as `Ok`; the caller reports it.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NoSelection`] without a selected job, or the request failure.
    pub async fn submit_application(&self) -> Result<FormSubmissionReply, PortalError> {
        let job_id = self.current_job.get().ok_or(PortalError::NoSelection("job"))?;
        let request = self.services.with_csrf(HttpRequest::post(
            self.services.routes().apply(job_id),
            HttpBody::DomForm {
                form_id: APPLICATION_FORM_ID.to_string(),
            },
        ));

        dom::set_button_busy(SUBMIT_BUTTON_ID, true, SUBMIT_BUSY_LABEL);
        let outcome = read_json_any_status::<_, FormSubmissionReply>(
            self.services.http().as_ref(),
            request,
        )
        .await;
        dom::set_button_busy(SUBMIT_BUTTON_ID, false, SUBMIT_IDLE_LABEL);

        let (_, reply) = outcome?;
        if reply.success {
            self.close_application_modal();
            dom::reset_form(APPLICATION_FORM_ID);
        }
        Ok(reply)
    }
}

/// Returns the alert text for a finished submission.
pub fn submission_alert(outcome: &Result<FormSubmissionReply, PortalError>) -> String {
    match outcome {
        Ok(reply) if reply.success => APPLICATION_SUBMITTED.to_string(),
        Ok(reply) => application_failure_message(reply),
        Err(PortalError::NoSelection(_)) => "No job selected".to_string(),
        Err(_) => APPLICATION_REQUEST_FAILED.to_string(),
    }
}

fn handle_action(page: &Rc<JobsPage>, action: PageAction) {
    match action {
        PageAction::ViewJob { job_id } => {
            let page = page.clone();
            spawn_local(async move {
                if let Err(err) = page.open_job(job_id).await {
                    logging::warn!("job {job_id} details load failed: {err}");
                    dom::alert(JOB_LOAD_FAILED);
                }
            });
        }
        PageAction::ApplyJob => page.open_application_modal(),
        PageAction::CloseJobModal => page.close_job_modal(),
        PageAction::CloseApplicationModal => page.close_application_modal(),
        _ => {}
    }
}

/// Wires the job modal buttons and the application form for the current reactive owner.
pub fn install_jobs_page(services: PortalServices) {
    let page = Rc::new(JobsPage::new(services));

    let click_page = page.clone();
    let click_listener = window_event_listener(ev::click, move |ev| {
        if let Some(action) = PageAction::from_event(&ev) {
            handle_action(&click_page, action);
        }
    });
    on_cleanup(move || click_listener.remove());

    let submit_listener = window_event_listener(ev::submit, move |ev| {
        if !event_within(&ev, &format!("#{APPLICATION_FORM_ID}")) {
            return;
        }
        ev.prevent_default();
        let page = page.clone();
        spawn_local(async move {
            let outcome = page.submit_application().await;
            if let Err(err) = &outcome {
                logging::warn!("application submit failed: {err}");
            }
            dom::alert(&submission_alert(&outcome));
        });
    });
    on_cleanup(move || submit_listener.remove());
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use futures::executor::block_on;
    use portal_host::{
        HttpMethod, HttpResponse, MemoryPrefsStore, PortalConfig, RequestError,
        ScriptedHttpClient, StaticCsrfToken,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn page_with(http: &ScriptedHttpClient) -> JobsPage {
        JobsPage::new(PortalServices::new(
            Rc::new(http.clone()),
            Rc::new(StaticCsrfToken::new("csrf-abc")),
            Rc::new(MemoryPrefsStore::default()),
            PortalConfig::default(),
        ))
    }

    fn job_json() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Platform Engineer",
            "company": "Initech",
            "location": "Remote",
            "description": "Keep the lights on.",
            "requirements": "Rust",
            "responsibilities": "",
            "job_type": "full_time"
        })
    }

    #[test]
    fn modal_content_fills_fallbacks_and_hides_blank_sections() {
        let job: JobDetail = serde_json::from_value(job_json()).expect("job");
        let content = JobModalContent::from(&job);

        assert_eq!(content.salary, "Not specified");
        assert_eq!(content.requirements.as_deref(), Some("Rust"));
        assert_eq!(content.responsibilities, None);
    }

    #[test]
    fn open_job_selects_and_loads_details() {
        let http = ScriptedHttpClient::default();
        http.push_response(HttpMethod::Get, "/api/job/7/", HttpResponse::json(&job_json()));
        let page = page_with(&http);

        let job = block_on(page.open_job(7)).expect("job");

        assert_eq!(job.title, "Platform Engineer");
        assert_eq!(page.current_job(), Some(7));
    }

    #[test]
    fn open_job_failure_is_reported() {
        let http = ScriptedHttpClient::default();
        http.push_response(HttpMethod::Get, "/api/job/9/", HttpResponse::new(404, ""));
        let page = page_with(&http);

        let err = block_on(page.open_job(9)).expect_err("missing job");

        assert_eq!(err, PortalError::Request(RequestError::Rejected { status: 404 }));
    }

    #[test]
    fn submit_without_selection_sends_nothing() {
        let http = ScriptedHttpClient::default();
        let page = page_with(&http);

        let outcome = block_on(page.submit_application());

        assert_eq!(outcome, Err(PortalError::NoSelection("job")));
        assert!(http.requests().is_empty());
        assert_eq!(submission_alert(&outcome), "No job selected");
    }

    #[test]
    fn submit_posts_form_with_csrf_and_reads_rejection_body() {
        let http = ScriptedHttpClient::default();
        http.push_response(HttpMethod::Get, "/api/job/7/", HttpResponse::json(&job_json()));
        http.push_response(
            HttpMethod::Post,
            "/applications/apply/7/",
            HttpResponse::new(
                400,
                json!({ "success": false, "errors": { "resume": ["This field is required."] } })
                    .to_string(),
            ),
        );
        let page = page_with(&http);
        block_on(page.open_job(7)).expect("job");

        let reply = block_on(page.submit_application()).expect("reply");

        let sent = http.requests();
        let post = &sent[1];
        assert_eq!(post.header("X-CSRFToken"), Some("csrf-abc"));
        assert_eq!(
            post.body,
            HttpBody::DomForm {
                form_id: "applicationForm".to_string()
            }
        );
        assert!(!reply.success);
        assert_eq!(
            submission_alert(&Ok(reply)),
            "Failed to submit application:\nresume: This field is required.\n"
        );
    }

    #[test]
    fn failure_message_lists_fields_alphabetically() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "phone".to_string(),
            vec!["Too short.".to_string(), "Digits only.".to_string()],
        );
        errors.insert("email".to_string(), vec!["Invalid.".to_string()]);
        let reply = FormSubmissionReply {
            success: false,
            message: Some("ignored".to_string()),
            errors: Some(errors),
        };

        assert_eq!(
            application_failure_message(&reply),
            "Failed to submit application:\nemail: Invalid.\nphone: Too short., Digits only.\n"
        );
    }

    #[test]
    fn failure_message_falls_back_to_server_message() {
        let reply = FormSubmissionReply {
            success: false,
            message: Some("You have already applied for this job.".to_string()),
            errors: None,
        };
        assert_eq!(
            application_failure_message(&reply),
            "You have already applied for this job."
        );
    }

    #[test]
    fn transport_failure_uses_generic_alert() {
        let outcome = Err(PortalError::Request(RequestError::Transport(
            "offline".to_string(),
        )));
        assert_eq!(submission_alert(&outcome), APPLICATION_REQUEST_FAILED);
        let success = Ok(FormSubmissionReply {
            success: true,
            ..FormSubmissionReply::default()
        });
        assert_eq!(submission_alert(&success), APPLICATION_SUBMITTED);
    }
}
