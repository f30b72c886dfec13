//! Page-level portal configuration and endpoint routing.
//!
//! Pages may embed a `<script type="application/json" id="portal-config">` block; every field is
//! optional and falls back to the portal's stock routes.

use serde::{Deserialize, Serialize};

use crate::{
    csrf::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME},
    models::NotificationId,
};

/// DOM id of the embedded configuration block.
pub const PORTAL_CONFIG_ELEMENT_ID: &str = "portal-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Route prefixes and client-side keys used by the portal components.
pub struct PortalConfig {
    /// Prefix of the applications API (`{api_base}/notifications/`, ...).
    pub api_base: String,
    /// Prefix of the public jobs API (`{job_api_base}/job/{id}/`).
    pub job_api_base: String,
    /// Prefix of the application submission route (`{apply_base}/apply/{id}/`).
    pub apply_base: String,
    /// Login page used when an anonymous visitor tries to apply.
    pub login_path: String,
    /// Cookie carrying the CSRF token.
    pub csrf_cookie: String,
    /// Header the CSRF token is echoed in.
    pub csrf_header: String,
    /// Local-storage key of the theme preference.
    pub theme_pref_key: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: "/applications/api".to_string(),
            job_api_base: "/api".to_string(),
            apply_base: "/applications".to_string(),
            login_path: "/accounts/login/".to_string(),
            csrf_cookie: CSRF_COOKIE_NAME.to_string(),
            csrf_header: CSRF_HEADER_NAME.to_string(),
            theme_pref_key: "theme".to_string(),
        }
    }
}

impl PortalConfig {
    /// Parses an embedded configuration block.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` message when the block is not a JSON object of known fields.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Returns the endpoint builder for this configuration.
    pub fn routes(&self) -> PortalRoutes {
        PortalRoutes {
            api_base: trim_base(&self.api_base),
            job_api_base: trim_base(&self.job_api_base),
            apply_base: trim_base(&self.apply_base),
        }
    }

    /// Returns the login redirect for a visitor currently on `current_path`.
    pub fn login_redirect(&self, current_path: &str) -> String {
        format!("{}?next={}", self.login_path, current_path)
    }
}

fn trim_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Builds the same-origin paths of every portal endpoint.
pub struct PortalRoutes {
    api_base: String,
    job_api_base: String,
    apply_base: String,
}

impl Default for PortalRoutes {
    fn default() -> Self {
        PortalConfig::default().routes()
    }
}

impl PortalRoutes {
    /// `GET` unread notifications.
    pub fn notifications(&self) -> String {
        format!("{}/notifications/", self.api_base)
    }

    /// `POST` mark one notification read.
    pub fn notification_read(&self, id: NotificationId) -> String {
        format!("{}/notifications/{id}/read/", self.api_base)
    }

    /// `POST` mark every notification read.
    pub fn notifications_read_all(&self) -> String {
        format!("{}/notifications/read-all/", self.api_base)
    }

    /// `GET` job posting details.
    pub fn job_detail(&self, job_id: u64) -> String {
        format!("{}/job/{job_id}/", self.job_api_base)
    }

    /// `POST` submit an application for a job.
    pub fn apply(&self, job_id: u64) -> String {
        format!("{}/apply/{job_id}/", self.apply_base)
    }

    /// `GET` applicant details (admin).
    pub fn application_detail(&self, application_id: u64) -> String {
        format!("{}/application/{application_id}/", self.api_base)
    }

    /// `POST` change an application's review status (admin).
    pub fn application_status(&self, application_id: u64) -> String {
        format!("{}/application/{application_id}/update-status/", self.api_base)
    }
}
