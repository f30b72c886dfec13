//! Admin applicant table: applicant details modal and status updates.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Duration,
};

use leptos::*;
use portal_host::{
    fetch_json, non_blank, read_json_any_status, status_badge_class, status_label,
    ApplicationDetail, FormSubmissionReply, HttpBody, HttpRequest, PortalServices,
};
use portal_host_web::dom;

use crate::{
    error::PortalError,
    events::{event_within, PageAction},
};

const APPLICANT_MODAL_ID: &str = "applicantModal";
const RESUME_CHECKBOX_ID: &str = "downloadResumeCheck";
const RESUME_UNCHECK_DELAY: Duration = Duration::from_secs(1);
const NOT_PROVIDED: &str = "Not provided";
const NO_COVER_LETTER: &str = "No cover letter provided";

/// Alert shown when the applicant modal cannot be loaded.
pub const APPLICATION_LOAD_FAILED: &str = "Failed to load application details. Please try again.";
/// Alert shown after a successful status change.
pub const STATUS_UPDATED: &str = "Status updated successfully!";
/// Alert shown when the status request itself fails.
pub const STATUS_REQUEST_FAILED: &str =
    "An error occurred while updating the status. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Text and links written into the applicant modal.
pub struct ApplicantModalContent {
    /// `#detailFullName`.
    pub full_name: String,
    /// `#detailEmail` text.
    pub email: String,
    /// `#detailEmail` href.
    pub email_href: String,
    /// `#detailPhone` text.
    pub phone: String,
    /// `#detailPhone` href.
    pub phone_href: String,
    /// `#detailLinkedin`; `None` shows the placeholder without a link.
    pub linkedin: Option<String>,
    /// `#detailPortfolio`; `None` shows the placeholder.
    pub portfolio: Option<String>,
    /// `#detailCoverLetter`.
    pub cover_letter: String,
    /// Resume link; `None` hides the download checkbox.
    pub resume_url: Option<String>,
}

impl From<&ApplicationDetail> for ApplicantModalContent {
    fn from(application: &ApplicationDetail) -> Self {
        Self {
            full_name: application.full_name.clone(),
            email: application.email.clone(),
            email_href: format!("mailto:{}", application.email),
            phone: application.phone.clone(),
            phone_href: format!("tel:{}", application.phone),
            linkedin: non_blank(&application.linkedin).map(str::to_string),
            portfolio: non_blank(&application.portfolio).map(str::to_string),
            cover_letter: non_blank(&application.cover_letter)
                .unwrap_or(NO_COVER_LETTER)
                .to_string(),
            resume_url: non_blank(&application.resume_url).map(str::to_string),
        }
    }
}

impl ApplicantModalContent {
    fn write_to_page(&self) {
        dom::set_text("detailFullName", &self.full_name);
        dom::set_text("detailEmail", &self.email);
        dom::set_attribute("detailEmail", "href", &self.email_href);
        dom::set_text("detailPhone", &self.phone);
        dom::set_attribute("detailPhone", "href", &self.phone_href);

        match &self.linkedin {
            Some(url) => {
                dom::set_text("detailLinkedin", url);
                dom::set_attribute("detailLinkedin", "href", url);
            }
            None => {
                dom::set_text("detailLinkedin", NOT_PROVIDED);
                dom::remove_attribute("detailLinkedin", "href");
            }
        }
        dom::set_display("detailLinkedin", "inline");

        match &self.portfolio {
            Some(url) => dom::replace_with_link("detailPortfolio", url, url, "info-link"),
            None => dom::set_text("detailPortfolio", NOT_PROVIDED),
        }

        dom::set_text("detailCoverLetter", &self.cover_letter);
        let resume_display = if self.resume_url.is_some() { "flex" } else { "none" };
        dom::set_parent_display(RESUME_CHECKBOX_ID, resume_display);
    }
}

/// Returns the `class` attribute of a status badge.
pub fn badge_class_name(status: &str) -> String {
    format!("badge {}", status_badge_class(status))
}

/// Owns the application selection for one admin applicant page.
pub struct ApplicantsPage {
    services: PortalServices,
    current_application: Cell<Option<u64>>,
    resume_url: RefCell<Option<String>>,
}

impl ApplicantsPage {
    /// Creates a page controller with no application selected.
    pub fn new(services: PortalServices) -> Self {
        Self {
            services,
            current_application: Cell::new(None),
            resume_url: RefCell::new(None),
        }
    }

    /// Returns the selected application.
    pub fn current_application(&self) -> Option<u64> {
        self.current_application.get()
    }

    /// Returns the resume link of the loaded application.
    pub fn resume_url(&self) -> Option<String> {
        self.resume_url.borrow().clone()
    }

    /// Selects `application_id`, loads it into the applicant modal, and shows it.
    ///
    /// # Errors
    ///
    /// Returns the request failure; the modal stays hidden.
    pub async fn open_application(
        &self,
        application_id: u64,
    ) -> Result<ApplicationDetail, PortalError> {
        self.current_application.set(Some(application_id));
        let request = self.services.with_csrf(HttpRequest::get(
            self.services.routes().application_detail(application_id),
        ));
        let application: ApplicationDetail =
            fetch_json(self.services.http().as_ref(), request).await?;

        let content = ApplicantModalContent::from(&application);
        content.write_to_page();
        *self.resume_url.borrow_mut() = content.resume_url;
        dom::add_class(APPLICANT_MODAL_ID, "show");
        Ok(application)
    }

    /// Hides the applicant modal and clears the selection.
    pub fn close_modal(&self) {
        dom::remove_class(APPLICANT_MODAL_ID, "show");
        self.current_application.set(None);
    }

    /// Posts `status` for the selected application.
    ///
    /// On `success: true` the row badge is rewritten and the modal closed. A `success: false`
    /// reply is returned as `Ok`; the caller reports it.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::NoSelection`] without a selected application, or the request
    /// failure.
    pub async fn update_status(&self, status: &str) -> Result<FormSubmissionReply, PortalError> {
        let application_id = self
            .current_application
            .get()
            .ok_or(PortalError::NoSelection("application"))?;
        let request = self.services.with_csrf(HttpRequest::post(
            self.services.routes().application_status(application_id),
            HttpBody::Form(vec![("status".to_string(), status.to_string())]),
        ));
        let (_, reply) = read_json_any_status::<_, FormSubmissionReply>(
            self.services.http().as_ref(),
            request,
        )
        .await?;

        if reply.success {
            let row = format!("tr[data-application-id=\"{application_id}\"]");
            if !dom::update_row_badge(&row, &badge_class_name(status), &status_label(status)) {
                logging::warn!("status badge for application {application_id} not found");
            }
            self.close_modal();
        }
        Ok(reply)
    }

    fn open_resume(&self) {
        if !dom::is_checked(RESUME_CHECKBOX_ID) {
            return;
        }
        let Some(url) = self.resume_url() else {
            return;
        };
        dom::open_in_new_tab(&url);
        set_timeout(
            || dom::set_checked(RESUME_CHECKBOX_ID, false),
            RESUME_UNCHECK_DELAY,
        );
    }
}

/// Returns the alert text for a finished status update.
pub fn status_alert(outcome: &Result<FormSubmissionReply, PortalError>) -> String {
    match outcome {
        Ok(reply) if reply.success => STATUS_UPDATED.to_string(),
        Ok(reply) => reply
            .message
            .clone()
            .unwrap_or_else(|| "Failed to update status".to_string()),
        Err(PortalError::NoSelection(_)) => "No application selected".to_string(),
        Err(_) => STATUS_REQUEST_FAILED.to_string(),
    }
}

fn handle_action(page: &Rc<ApplicantsPage>, action: PageAction) {
    match action {
        PageAction::ViewApplication { application_id } => {
            let page = page.clone();
            spawn_local(async move {
                if let Err(err) = page.open_application(application_id).await {
                    logging::warn!("application {application_id} details load failed: {err}");
                    dom::alert(APPLICATION_LOAD_FAILED);
                }
            });
        }
        PageAction::CloseApplicantModal => page.close_modal(),
        PageAction::UpdateStatus { status } => {
            let page = page.clone();
            spawn_local(async move {
                let outcome = page.update_status(&status).await;
                if let Err(err) = &outcome {
                    logging::warn!("status update to {status} failed: {err}");
                }
                dom::alert(&status_alert(&outcome));
            });
        }
        _ => {}
    }
}

/// Wires the applicant modal buttons and the resume checkbox for the current reactive owner.
pub fn install_applicants_page(services: PortalServices) {
    let page = Rc::new(ApplicantsPage::new(services));

    let click_listener = window_event_listener(ev::click, move |ev| {
        if event_within(&ev, &format!("#{RESUME_CHECKBOX_ID}")) {
            page.open_resume();
        } else if let Some(action) = PageAction::from_event(&ev) {
            handle_action(&page, action);
        }
    });
    on_cleanup(move || click_listener.remove());
}
