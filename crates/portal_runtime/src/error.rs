//! Error taxonomy of the page glue controllers.

use portal_host::RequestError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures of the page glue components.
pub enum PortalError {
    /// An element the operation depends on is not in the page.
    #[error("element `#{0}` not found")]
    MissingElement(&'static str),
    /// The operation needs a selected job or application and none is active.
    #[error("no {0} selected")]
    NoSelection(&'static str),
    /// The backend request failed.
    #[error(transparent)]
    Request(#[from] RequestError),
}
