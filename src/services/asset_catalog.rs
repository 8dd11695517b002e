//! Runs search page actions against the asset REST API.

use std::sync::Arc;

use crate::domain::asset::{Asset, AssetType};
use crate::domain::notification::Notification;
use crate::domain::search::SearchState;
use crate::domain::types::PageSize;
use crate::dto::search::{AssetRow, SearchPageData};
use crate::forms::search::SearchForm;
use crate::i18n::Localize;
use crate::services::ServiceResult;
use crate::services::search::{
    NotificationBuffer, Notifier, PendingRequest, QueuedDispatcher, ResponseTarget,
    SearchPageController,
};

pub const MSG_SEARCH_FAILED: &str = "search.error.request-failed";
pub const MSG_TYPES_FAILED: &str = "search.error.types-failed";

const DEFAULT_SEARCH_FAILED: &str = "Failed to load metadata for current search!";
const DEFAULT_TYPES_FAILED: &str = "Failed to load Open Metadata Types!";

/// Read access to the metadata back end's asset endpoints.
///
/// `url` is relative to the back end's base URL and already carries the query.
#[allow(async_fn_in_trait)]
pub trait AssetApi {
    async fn fetch_assets(&self, url: &str) -> ServiceResult<Vec<Asset>>;
    async fn fetch_asset_types(&self, url: &str) -> ServiceResult<Vec<AssetType>>;
}

/// User interaction on the search page.
#[derive(Debug)]
pub enum SearchAction {
    /// Page opened; only loads the type list when it is not known yet.
    Load,
    Search(SearchForm),
    Next,
    Prev,
    ChangePageSize(PageSize),
}

/// Page state carried between requests.
#[derive(Debug, Default)]
pub struct SearchSession {
    pub state: SearchState,
    pub asset_types: Vec<AssetType>,
}

/// Applies `action` to the saved page state and executes the resulting requests.
///
/// Results are not kept between requests. When the action leaves the grid
/// alone (a rejected search or page move, a plain page load) the page that
/// was on screen is fetched again so it stays visible.
pub async fn handle_search_action<A>(
    api: &A,
    localizer: Arc<dyn Localize + Send + Sync>,
    session: SearchSession,
    action: SearchAction,
) -> SearchPageData
where
    A: AssetApi,
{
    let dispatcher = QueuedDispatcher::default();
    let notifier = NotificationBuffer::default();
    let shown = (session.state.result_count > 0).then(|| session.state.search_url());
    let mut controller = SearchPageController::new(&dispatcher, &notifier)
        .with_state(session.state)
        .with_asset_types(session.asset_types)
        .with_localizer(localizer.clone());

    if controller.asset_types().is_empty() {
        controller.ready();
    }

    match action {
        SearchAction::Load => {}
        SearchAction::Search(form) => {
            controller.set_query(form.q);
            controller.set_types(form.types);
            controller.search();
        }
        SearchAction::Next => controller.go_next(),
        SearchAction::Prev => controller.go_prev(),
        SearchAction::ChangePageSize(page_size) => controller.on_page_size_changed(page_size),
    }

    let mut requests = dispatcher.drain();
    let searches = requests
        .iter()
        .any(|request| matches!(request.target, ResponseTarget::SearchResults));
    if let Some(url) = shown.filter(|_| !searches) {
        log::debug!("Reloading displayed results: {url}");
        requests.push(PendingRequest {
            target: ResponseTarget::SearchResults,
            url,
        });
    }

    for request in requests {
        match request.target {
            ResponseTarget::SearchResults => match api.fetch_assets(&request.url).await {
                Ok(assets) => controller.receive_results(assets),
                Err(err) => {
                    log::error!("Failed to search assets: {err}");
                    controller.receive_results(Vec::new());
                    notifier.notify(Notification::error(
                        localizer.text(MSG_SEARCH_FAILED, DEFAULT_SEARCH_FAILED),
                    ));
                }
            },
            ResponseTarget::AssetTypes => match api.fetch_asset_types(&request.url).await {
                Ok(asset_types) => controller.receive_types(asset_types),
                Err(err) => {
                    log::error!("Failed to load asset types: {err}");
                    notifier.notify(Notification::error(
                        localizer.text(MSG_TYPES_FAILED, DEFAULT_TYPES_FAILED),
                    ));
                }
            },
        }
    }

    SearchPageData {
        current_page: controller.current_page(),
        rows: controller.results().iter().map(AssetRow::from).collect(),
        asset_types: controller.asset_types().to_vec(),
        notifications: notifier.take(),
        state: controller.into_state(),
    }
}
