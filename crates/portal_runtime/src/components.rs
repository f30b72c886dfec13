//! Page-level composition of the portal glue.

use leptos::*;

use crate::{
    applicants::install_applicants_page,
    chrome::{install_alert_dismissal, install_user_menu},
    context::use_portal,
    jobs::install_jobs_page,
    search::install_row_filters,
    theme::install_theme_toggle,
};

#[component]
/// Installs every page controller for the lifetime of the mounted owner.
///
/// Renders nothing; the controllers act on the server-rendered markup. Controllers whose
/// elements are missing from the current page stay idle.
pub fn PortalControllers() -> impl IntoView {
    let services = use_portal().services();

    install_theme_toggle(&services);
    install_user_menu();
    install_alert_dismissal();
    install_row_filters();
    install_jobs_page(services.clone());
    install_applicants_page(services);
}
