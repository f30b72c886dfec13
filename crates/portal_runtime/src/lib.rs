//! Browser-side glue for the HireChain job portal.
//!
//! The notification bell is a Leptos component backed by a reducer and a polling sync service.
//! The remaining controllers attach delegated listeners to the server-rendered pages and patch
//! them through `portal_host_web::dom`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod applicants;
pub mod chrome;
pub mod components;
pub mod context;
pub mod error;
pub mod events;
pub mod jobs;
pub mod notifications;
pub mod search;
pub mod theme;

pub use applicants::ApplicantsPage;
pub use components::PortalControllers;
pub use context::{use_portal, PortalContext, PortalProvider};
pub use error::PortalError;
pub use events::PageAction;
pub use jobs::JobsPage;
pub use notifications::{
    NotificationAction, NotificationCenter, NotificationPanelState, NotificationSync, PanelStore,
};
pub use search::{RowFilter, APPLICANT_ROWS, JOB_CARDS};
pub use theme::{Theme, ThemeController};
