//! Delegated click handling for server-rendered `data-action` hooks.

use wasm_bindgen::JsCast;

/// Attribute naming the action a clickable element triggers.
pub const ACTION_ATTRIBUTE: &str = "data-action";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions the server-rendered markup can request through `data-*` attributes.
pub enum PageAction {
    /// Open the job modal for `job_id`.
    ViewJob {
        /// Job posting id from `data-job-id`.
        job_id: u64,
    },
    /// Move from the job modal to the application form.
    ApplyJob,
    /// Close the job modal.
    CloseJobModal,
    /// Close the application modal.
    CloseApplicationModal,
    /// Open the applicant modal for `application_id`.
    ViewApplication {
        /// Application id from `data-application-id`.
        application_id: u64,
    },
    /// Close the applicant modal.
    CloseApplicantModal,
    /// Post a new status for the selected application.
    UpdateStatus {
        /// Status token from `data-status`.
        status: String,
    },
}

impl PageAction {
    /// Builds an action from an element's `data-action` value and an attribute lookup.
    ///
    /// Returns `None` for unknown actions and for actions missing a required, parseable
    /// attribute.
    pub fn from_attributes(
        action: &str,
        attribute: impl Fn(&str) -> Option<String>,
    ) -> Option<Self> {
        let id = |name: &str| attribute(name).and_then(|raw| raw.trim().parse::<u64>().ok());
        match action {
            "view-job" => Some(Self::ViewJob {
                job_id: id("data-job-id")?,
            }),
            "apply-job" => Some(Self::ApplyJob),
            "close-job-modal" => Some(Self::CloseJobModal),
            "close-application-modal" => Some(Self::CloseApplicationModal),
            "view-application" => Some(Self::ViewApplication {
                application_id: id("data-application-id")?,
            }),
            "close-applicant-modal" => Some(Self::CloseApplicantModal),
            "update-status" => Some(Self::UpdateStatus {
                status: attribute("data-status").filter(|status| !status.is_empty())?,
            }),
            _ => None,
        }
    }

    /// Resolves the action of the nearest `[data-action]` ancestor of the event target.
    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let element = closest_to_target(ev, "[data-action]")?;
        let action = element.get_attribute(ACTION_ATTRIBUTE)?;
        Self::from_attributes(&action, |name| element.get_attribute(name))
    }
}

/// Returns the nearest ancestor-or-self of the event target matching `selector`.
pub fn closest_to_target(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    ev.target()?
        .dyn_into::<web_sys::Element>()
        .ok()?
        .closest(selector)
        .ok()
        .flatten()
}

/// Returns `true` when the event target lies inside an element matching `selector`.
pub fn event_within(ev: &web_sys::Event, selector: &str) -> bool {
    closest_to_target(ev, selector).is_some()
}
