//! Asset search page controller.
//!
//! The controller owns the page's [`SearchState`] and turns user actions into
//! requests handed to a [`RequestDispatcher`]. Responses come back later
//! through [`SearchPageController::receive_results`] and
//! [`SearchPageController::receive_types`]. Validation and paging problems
//! are reported through a [`Notifier`] and never touch the state.

use std::cell::RefCell;
use std::sync::Arc;

use validator::ValidateLength;

use crate::domain::asset::{Asset, AssetType};
use crate::domain::notification::Notification;
use crate::domain::search::{MIN_QUERY_LENGTH, SearchState, TYPES_ENDPOINT};
use crate::domain::types::PageSize;
use crate::i18n::{Localize, NoTranslations};
use crate::pagination;

pub const MSG_QUERY_TOO_SHORT: &str = "search.error.query-too-short";
pub const MSG_NO_TYPE_SELECTED: &str = "search.error.no-type-selected";
pub const MSG_NO_MORE_RESULTS: &str = "search.error.no-more-results";

const DEFAULT_QUERY_TOO_SHORT: &str = "Search criteria minimum length is 2 characters !";
const DEFAULT_NO_TYPE_SELECTED: &str = "Please select at least one Open Metadata Type !";
const DEFAULT_NO_MORE_RESULTS: &str = "Oops! No more metadata for current search!";

/// Where the response of a dispatched request must be delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseTarget {
    SearchResults,
    AssetTypes,
}

/// Issues REST requests on behalf of the controller.
///
/// Implementations run the request asynchronously and hand the response back
/// through the controller's `receive_*` methods.
pub trait RequestDispatcher {
    fn dispatch(&self, target: ResponseTarget, url: &str);
}

/// Displays notifications raised by the controller.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<T: RequestDispatcher + ?Sized> RequestDispatcher for &T {
    fn dispatch(&self, target: ResponseTarget, url: &str) {
        (**self).dispatch(target, url)
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// A request recorded by [`QueuedDispatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRequest {
    pub target: ResponseTarget,
    pub url: String,
}

/// Dispatcher that queues requests for the caller to execute.
#[derive(Debug, Default)]
pub struct QueuedDispatcher {
    pending: RefCell<Vec<PendingRequest>>,
}

impl QueuedDispatcher {
    /// Removes and returns every queued request, oldest first.
    pub fn drain(&self) -> Vec<PendingRequest> {
        self.pending.take()
    }
}

impl RequestDispatcher for QueuedDispatcher {
    fn dispatch(&self, target: ResponseTarget, url: &str) {
        log::debug!("Queued {target:?} request: {url}");
        self.pending.borrow_mut().push(PendingRequest {
            target,
            url: url.to_string(),
        });
    }
}

/// Notifier that collects notifications for rendering.
#[derive(Debug, Default)]
pub struct NotificationBuffer {
    notifications: RefCell<Vec<Notification>>,
}

impl NotificationBuffer {
    pub fn take(&self) -> Vec<Notification> {
        self.notifications.take()
    }
}

impl Notifier for NotificationBuffer {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Lifecycle of the controller between user actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Fetching,
}

/// State machine behind the asset search page.
pub struct SearchPageController<D, N> {
    state: SearchState,
    results: Vec<Asset>,
    asset_types: Vec<AssetType>,
    phase: Phase,
    dispatcher: D,
    notifier: N,
    localizer: Arc<dyn Localize + Send + Sync>,
}

impl<D, N> SearchPageController<D, N>
where
    D: RequestDispatcher,
    N: Notifier,
{
    pub fn new(dispatcher: D, notifier: N) -> Self {
        Self {
            state: SearchState::default(),
            results: Vec::new(),
            asset_types: Vec::new(),
            phase: Phase::Idle,
            dispatcher,
            notifier,
            localizer: Arc::new(NoTranslations),
        }
    }

    /// Restores previously saved page state.
    pub fn with_state(mut self, state: SearchState) -> Self {
        self.state = state;
        self
    }

    pub fn with_asset_types(mut self, asset_types: Vec<AssetType>) -> Self {
        self.asset_types = asset_types;
        self
    }

    pub fn with_localizer(mut self, localizer: Arc<dyn Localize + Send + Sync>) -> Self {
        self.localizer = localizer;
        self
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn into_state(self) -> SearchState {
        self.state
    }

    pub fn results(&self) -> &[Asset] {
        &self.results
    }

    pub fn asset_types(&self) -> &[AssetType] {
        &self.asset_types
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        self.state.q = q.into();
    }

    pub fn set_types(&mut self, types: Vec<String>) {
        self.state.types = types;
    }

    /// Requests the list of open metadata types offered as filters.
    pub fn ready(&mut self) {
        self.dispatcher
            .dispatch(ResponseTarget::AssetTypes, TYPES_ENDPOINT);
    }

    /// Checks the search field and type selection, notifying on the first problem.
    pub fn validate(&mut self) -> bool {
        self.phase = Phase::Validating;

        let problem = if !self
            .state
            .q
            .validate_length(Some(MIN_QUERY_LENGTH), None, None)
        {
            Some((MSG_QUERY_TOO_SHORT, DEFAULT_QUERY_TOO_SHORT))
        } else if self.state.types.is_empty() {
            Some((MSG_NO_TYPE_SELECTED, DEFAULT_NO_TYPE_SELECTED))
        } else {
            None
        };

        self.phase = Phase::Idle;
        match problem {
            Some((key, default)) => {
                log::warn!("Rejected search for {:?}: {default}", self.state.q);
                self.notify_error(key, default);
                false
            }
            None => true,
        }
    }

    /// Starts a new search from the first page.
    pub fn search(&mut self) {
        self.state.from = 0;
        self.fetch();
    }

    /// Requests the current page. Returns whether a request was dispatched.
    pub fn fetch(&mut self) -> bool {
        if !self.validate() {
            return false;
        }

        self.results.clear();
        self.state.result_count = 0;

        let url = self.state.search_url();
        self.phase = Phase::Fetching;
        self.dispatcher.dispatch(ResponseTarget::SearchResults, &url);
        true
    }

    /// Moves to the next page when the current one was full.
    pub fn go_next(&mut self) {
        if pagination::may_have_next_page(self.state.result_count, self.state.page_size) {
            self.state.from = pagination::next_offset(self.state.from, self.state.page_size);
            self.fetch();
        } else {
            self.notify_error(MSG_NO_MORE_RESULTS, DEFAULT_NO_MORE_RESULTS);
        }
    }

    /// Moves to the previous page, if there is one.
    pub fn go_prev(&mut self) {
        if self.current_page() > 1 {
            self.state.from = pagination::previous_offset(self.state.from, self.state.page_size);
            self.fetch();
        }
    }

    pub fn on_page_size_changed(&mut self, page_size: PageSize) {
        self.state.page_size = page_size;
        self.state.from = 0;
        if !self.state.q.trim().is_empty() {
            self.fetch();
        }
    }

    /// Stores the response of a [`ResponseTarget::SearchResults`] request.
    pub fn receive_results(&mut self, results: Vec<Asset>) {
        self.state.result_count = results.len();
        self.results = results;
        self.phase = Phase::Idle;
    }

    /// Stores the response of a [`ResponseTarget::AssetTypes`] request.
    pub fn receive_types(&mut self, asset_types: Vec<AssetType>) {
        self.asset_types = asset_types;
    }

    /// Label shown for an asset in the results grid.
    pub fn display_name(asset: &Asset) -> &str {
        asset.display_name()
    }

    fn notify_error(&self, key: &str, default: &str) {
        self.notifier
            .notify(Notification::error(self.localizer.text(key, default)));
    }
}
