//! Request/response sequences that keep the notification feed in step with the server.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use portal_host::{
    fetch_json, send_expect_success, unix_time_ms_now, HttpBody, HttpRequest, NotificationFeed,
    NotificationId, PortalServices, RequestError,
};
use serde_json::json;

use super::{
    model::NotificationPanelState,
    reducer::{reduce_notifications, NotificationAction, SyncOperation},
};

/// Sink for reducer actions produced by [`NotificationSync`].
pub type NotificationDispatch = Rc<dyn Fn(NotificationAction)>;

#[derive(Clone)]
/// Issues notification requests and dispatches their outcomes.
///
/// Calls are not serialized: overlapping refreshes each dispatch on completion, so the last
/// response to arrive is the one displayed. Every failure is logged, recorded in diagnostics,
/// and returned; none of them touches the feed.
pub struct NotificationSync {
    services: PortalServices,
    dispatch: NotificationDispatch,
}

impl NotificationSync {
    /// Creates a sync service dispatching into `dispatch`.
    pub fn new(services: PortalServices, dispatch: impl Fn(NotificationAction) + 'static) -> Self {
        Self {
            services,
            dispatch: Rc::new(dispatch),
        }
    }

    /// Loads the unread feed and replaces the current one.
    ///
    /// # Errors
    ///
    /// Returns the request failure after recording it.
    pub async fn refresh(&self) -> Result<(), RequestError> {
        let request = HttpRequest::get(self.services.routes().notifications());
        match fetch_json::<_, NotificationFeed>(self.services.http().as_ref(), request).await {
            Ok(feed) => {
                (self.dispatch)(NotificationAction::FeedLoaded {
                    feed,
                    at_ms: unix_time_ms_now(),
                });
                Ok(())
            }
            Err(err) => Err(self.record_failure(SyncOperation::Refresh, err)),
        }
    }

    /// Marks one notification read, drops it from the list, then refreshes.
    ///
    /// A failed follow-up refresh is logged by [`Self::refresh`] and does not fail the
    /// acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns the acknowledgement failure; the feed is left untouched.
    pub async fn acknowledge(&self, id: NotificationId) -> Result<(), RequestError> {
        let request = self.state_changing(self.services.routes().notification_read(id));
        if let Err(err) = send_expect_success(self.services.http().as_ref(), request).await {
            return Err(self.record_failure(SyncOperation::Acknowledge(id), err));
        }
        (self.dispatch)(NotificationAction::Acknowledged { id });
        let _ = self.refresh().await;
        Ok(())
    }

    /// Marks every notification read, then refreshes.
    ///
    /// # Errors
    ///
    /// Returns the acknowledgement failure; the feed is left untouched.
    pub async fn acknowledge_all(&self) -> Result<(), RequestError> {
        let request = self.state_changing(self.services.routes().notifications_read_all());
        if let Err(err) = send_expect_success(self.services.http().as_ref(), request).await {
            return Err(self.record_failure(SyncOperation::AcknowledgeAll, err));
        }
        let _ = self.refresh().await;
        Ok(())
    }

    fn state_changing(&self, path: String) -> HttpRequest {
        self.services
            .with_csrf(HttpRequest::post(path, HttpBody::Json(json!({}))))
    }

    fn record_failure(&self, operation: SyncOperation, err: RequestError) -> RequestError {
        logging::warn!("{operation} failed: {err}");
        (self.dispatch)(NotificationAction::SyncFailed {
            operation,
            error: err.to_string(),
            at_ms: unix_time_ms_now(),
        });
        err
    }
}

#[derive(Clone, Default)]
/// Reducer container for driving [`NotificationSync`] outside a reactive owner.
pub struct PanelStore {
    state: Rc<RefCell<NotificationPanelState>>,
}

impl PanelStore {
    /// Returns a dispatch closure that reduces into this store.
    pub fn dispatcher(&self) -> impl Fn(NotificationAction) + 'static {
        let state = self.state.clone();
        move |action| reduce_notifications(&mut state.borrow_mut(), action)
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> NotificationPanelState {
        self.state.borrow().clone()
    }
}
