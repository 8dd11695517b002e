use std::cell::RefCell;
use std::sync::Arc;

use egeria_ui::domain::asset::{Asset, AssetProperties, AssetType, AssetTypeRef};
use egeria_ui::domain::notification::{Notification, NotificationLevel};
use egeria_ui::domain::search::SearchState;
use egeria_ui::domain::types::PageSize;
use egeria_ui::forms::search::SearchForm;
use egeria_ui::i18n::NoTranslations;
use egeria_ui::services::asset_catalog::{
    AssetApi, SearchAction, SearchSession, handle_search_action,
};
use egeria_ui::services::{ServiceError, ServiceResult};

#[derive(Default)]
struct FakeAssetApi {
    assets: Vec<Asset>,
    asset_types: Vec<AssetType>,
    fail_search: bool,
    requests: RefCell<Vec<String>>,
}

impl AssetApi for FakeAssetApi {
    async fn fetch_assets(&self, url: &str) -> ServiceResult<Vec<Asset>> {
        self.requests.borrow_mut().push(url.to_string());
        if self.fail_search {
            return Err(ServiceError::Upstream("connection refused".to_string()));
        }
        Ok(self.assets.clone())
    }

    async fn fetch_asset_types(&self, url: &str) -> ServiceResult<Vec<AssetType>> {
        self.requests.borrow_mut().push(url.to_string());
        Ok(self.asset_types.clone())
    }
}

fn asset_types() -> Vec<AssetType> {
    ["Asset", "DataFile", "RelationalTable"]
        .into_iter()
        .map(|name| AssetType {
            name: name.to_string(),
            description: None,
        })
        .collect()
}

fn assets(count: usize) -> Vec<Asset> {
    (0..count)
        .map(|i| Asset {
            guid: format!("guid-{i}"),
            asset_type: AssetTypeRef {
                name: "DataFile".to_string(),
            },
            properties: AssetProperties {
                display_name: Some(format!("customers-{i}.csv")),
                ..AssetProperties::default()
            },
        })
        .collect()
}

fn known_types_session(state: SearchState) -> SearchSession {
    SearchSession {
        state,
        asset_types: asset_types(),
    }
}

fn searched_state(from: usize, result_count: usize) -> SearchState {
    SearchState {
        q: "customers".to_string(),
        types: vec!["DataFile".to_string()],
        from,
        page_size: PageSize::Ten,
        result_count,
    }
}

#[actix_web::test]
async fn first_load_fetches_asset_types_only() {
    let api = FakeAssetApi {
        asset_types: asset_types(),
        ..FakeAssetApi::default()
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        SearchSession::default(),
        SearchAction::Load,
    )
    .await;

    assert_eq!(*api.requests.borrow(), vec!["/api/assets/types".to_string()]);
    assert_eq!(data.asset_types.len(), 3);
    assert!(data.rows.is_empty());
    assert!(data.notifications.is_empty());
    assert_eq!(data.current_page, 1);
}

#[actix_web::test]
async fn load_without_shown_results_issues_no_requests() {
    let api = FakeAssetApi::default();

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(0, 0)),
        SearchAction::Load,
    )
    .await;

    assert!(api.requests.borrow().is_empty());
    assert!(data.rows.is_empty());
    assert_eq!(data.current_page, 1);
}

#[actix_web::test]
async fn load_reloads_the_page_on_screen() {
    let api = FakeAssetApi {
        assets: assets(10),
        ..FakeAssetApi::default()
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(20, 10)),
        SearchAction::Load,
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile&from=20&pageSize=10".to_string()]
    );
    assert_eq!(data.current_page, 3);
    assert_eq!(data.rows.len(), 10);
    assert_eq!(data.state.result_count, 10);
}

#[actix_web::test]
async fn search_renders_rows_from_first_page() {
    let api = FakeAssetApi {
        assets: assets(3),
        ..FakeAssetApi::default()
    };
    let form = SearchForm {
        q: "customers".to_string(),
        types: vec!["DataFile".to_string(), "RelationalTable".to_string()],
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(30, 10)),
        SearchAction::Search(form),
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile,RelationalTable&pageSize=10".to_string()]
    );
    assert_eq!(data.state.from, 0);
    assert_eq!(data.state.result_count, 3);
    assert_eq!(data.rows.len(), 3);
    assert_eq!(data.rows[0].name, "customers-0.csv");
    assert_eq!(data.rows[0].guid, "guid-0");
}

#[actix_web::test]
async fn invalid_search_only_notifies() {
    let api = FakeAssetApi::default();
    let form = SearchForm {
        q: "c".to_string(),
        types: vec!["DataFile".to_string()],
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(SearchState::default()),
        SearchAction::Search(form),
    )
    .await;

    assert!(api.requests.borrow().is_empty());
    assert_eq!(
        data.notifications,
        vec![Notification::error(
            "Search criteria minimum length is 2 characters !"
        )]
    );
}

#[actix_web::test]
async fn next_page_after_full_page_advances_offset() {
    let api = FakeAssetApi {
        assets: assets(10),
        ..FakeAssetApi::default()
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(10, 10)),
        SearchAction::Next,
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile&from=20&pageSize=10".to_string()]
    );
    assert_eq!(data.state.from, 20);
    assert_eq!(data.current_page, 3);
}

#[actix_web::test]
async fn next_page_after_partial_page_keeps_offset() {
    let api = FakeAssetApi::default();

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(10, 7)),
        SearchAction::Next,
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile&from=10&pageSize=10".to_string()]
    );
    assert_eq!(data.state.from, 10);
    assert_eq!(data.notifications.len(), 1);
    assert_eq!(data.notifications[0].level, NotificationLevel::Error);
}

#[actix_web::test]
async fn rejected_next_keeps_rows_on_screen() {
    let api = FakeAssetApi {
        assets: assets(4),
        ..FakeAssetApi::default()
    };

    let back = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(20, 10)),
        SearchAction::Prev,
    )
    .await;
    assert_eq!(back.state.from, 10);
    assert_eq!(back.rows.len(), 4);

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(back.state),
        SearchAction::Next,
    )
    .await;

    assert_eq!(data.state.from, 10);
    assert_eq!(data.rows.len(), 4);
    assert_eq!(data.state.result_count, 4);
    assert_eq!(
        data.notifications,
        vec![Notification::error(
            "Oops! No more metadata for current search!"
        )]
    );
    assert_eq!(
        api.requests.borrow().last().map(String::as_str),
        Some("/api/assets/search?q=customers&types=DataFile&from=10&pageSize=10")
    );
}

#[actix_web::test]
async fn rejected_search_keeps_previous_rows() {
    let api = FakeAssetApi {
        assets: assets(6),
        ..FakeAssetApi::default()
    };
    let form = SearchForm {
        q: "c".to_string(),
        types: vec!["DataFile".to_string()],
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(0, 6)),
        SearchAction::Search(form),
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile&pageSize=10".to_string()]
    );
    assert_eq!(data.rows.len(), 6);
    assert_eq!(data.state.q, "c");
    assert_eq!(data.notifications.len(), 1);
}

#[actix_web::test]
async fn page_size_change_restarts_from_first_page() {
    let api = FakeAssetApi {
        assets: assets(2),
        ..FakeAssetApi::default()
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(40, 10)),
        SearchAction::ChangePageSize(PageSize::Hundred),
    )
    .await;

    assert_eq!(
        *api.requests.borrow(),
        vec!["/api/assets/search?q=customers&types=DataFile&pageSize=100".to_string()]
    );
    assert_eq!(data.state.from, 0);
    assert_eq!(data.state.page_size, PageSize::Hundred);
}

#[actix_web::test]
async fn upstream_failure_is_reported_as_notification() {
    let api = FakeAssetApi {
        fail_search: true,
        ..FakeAssetApi::default()
    };

    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(searched_state(0, 0)),
        SearchAction::Prev,
    )
    .await;
    assert!(api.requests.borrow().is_empty());
    assert!(data.notifications.is_empty());

    let form = SearchForm {
        q: "customers".to_string(),
        types: vec!["DataFile".to_string()],
    };
    let data = handle_search_action(
        &api,
        Arc::new(NoTranslations),
        known_types_session(SearchState::default()),
        SearchAction::Search(form),
    )
    .await;

    assert!(data.rows.is_empty());
    assert_eq!(
        data.notifications,
        vec![Notification::error(
            "Failed to load metadata for current search!"
        )]
    );
}
