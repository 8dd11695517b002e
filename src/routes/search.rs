use std::sync::RwLock;

use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::clients::assets::AssetClient;
use crate::domain::asset::AssetType;
use crate::domain::search::SearchState;
use crate::domain::types::PageSize;
use crate::dto::search::SearchPageData;
use crate::forms::search::{PageSizeForm, SearchForm};
use crate::i18n::LocaleCatalog;
use crate::routes::{base_context, flash_alerts, notification_level_to_str, redirect, render_template};
use crate::services::asset_catalog::{SearchAction, SearchSession, handle_search_action};

const SEARCH_STATE_KEY: &str = "asset_search_state";
const SEARCH_PAGE: &str = "/asset-catalog";

/// Open metadata types shared by every visitor, loaded by the first search page view.
#[derive(Debug, Default)]
pub struct AssetTypeCache(RwLock<Vec<AssetType>>);

impl AssetTypeCache {
    pub fn get(&self) -> Vec<AssetType> {
        match self.0.read() {
            Ok(asset_types) => asset_types.clone(),
            Err(_) => Vec::new(),
        }
    }

    pub fn fill(&self, asset_types: &[AssetType]) {
        if asset_types.is_empty() {
            return;
        }
        if let Ok(mut cached) = self.0.write() {
            if cached.is_empty() {
                *cached = asset_types.to_vec();
            }
        }
    }
}

fn load_session(session: &Session, asset_types: &AssetTypeCache) -> SearchSession {
    let state = session
        .get::<SearchState>(SEARCH_STATE_KEY)
        .unwrap_or_else(|err| {
            log::warn!("Discarding unreadable search state: {err}");
            None
        })
        .unwrap_or_default();

    SearchSession {
        state,
        asset_types: asset_types.get(),
    }
}

fn save_session(session: &Session, asset_types: &AssetTypeCache, data: &SearchPageData) {
    if let Err(err) = session.insert(SEARCH_STATE_KEY, &data.state) {
        log::error!("Failed to save search state: {err}");
    }
    asset_types.fill(&data.asset_types);
}

struct SearchPage<'a> {
    session: &'a Session,
    flash_messages: &'a IncomingFlashMessages,
    api: &'a AssetClient,
    asset_types: &'a AssetTypeCache,
    locale: web::Data<LocaleCatalog>,
    tera: &'a Tera,
}

async fn respond(action: SearchAction, page: SearchPage<'_>) -> HttpResponse {
    let session = load_session(page.session, page.asset_types);
    let data = handle_search_action(page.api, page.locale.into_inner(), session, action).await;
    save_session(page.session, page.asset_types, &data);
    let flash_messages = page.flash_messages;

    let mut alerts = flash_alerts(flash_messages);
    alerts.extend(
        data.notifications
            .iter()
            .map(|n| (n.message.clone(), notification_level_to_str(n.level))),
    );

    let page_sizes: Vec<usize> = PageSize::ALL.iter().map(|size| size.get()).collect();

    let mut context = base_context(flash_messages, "asset-catalog");
    context.insert("alerts", &alerts);
    context.insert("state", &data.state);
    context.insert("current_page_number", &data.current_page);
    context.insert("rows", &data.rows);
    context.insert("asset_types", &data.asset_types);
    context.insert("page_sizes", &page_sizes);

    render_template(page.tera, "search/index.html", &context)
}

#[get("/asset-catalog")]
pub async fn show_search(
    session: Session,
    flash_messages: IncomingFlashMessages,
    api: web::Data<AssetClient>,
    asset_types: web::Data<AssetTypeCache>,
    locale: web::Data<LocaleCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(
        SearchAction::Load,
        SearchPage {
            session: &session,
            flash_messages: &flash_messages,
            api: api.get_ref(),
            asset_types: asset_types.get_ref(),
            locale,
            tera: tera.get_ref(),
        },
    )
    .await
}

#[post("/asset-catalog/search")]
pub async fn search_assets(
    session: Session,
    flash_messages: IncomingFlashMessages,
    api: web::Data<AssetClient>,
    asset_types: web::Data<AssetTypeCache>,
    locale: web::Data<LocaleCatalog>,
    tera: web::Data<Tera>,
    form: web::Bytes,
) -> impl Responder {
    let form: SearchForm = match serde_html_form::from_bytes(&form) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse search form: {err}");
            FlashMessage::error("Malformed search form.").send();
            return redirect(SEARCH_PAGE);
        }
    };

    respond(
        SearchAction::Search(form),
        SearchPage {
            session: &session,
            flash_messages: &flash_messages,
            api: api.get_ref(),
            asset_types: asset_types.get_ref(),
            locale,
            tera: tera.get_ref(),
        },
    )
    .await
}

#[post("/asset-catalog/next")]
pub async fn next_page(
    session: Session,
    flash_messages: IncomingFlashMessages,
    api: web::Data<AssetClient>,
    asset_types: web::Data<AssetTypeCache>,
    locale: web::Data<LocaleCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(
        SearchAction::Next,
        SearchPage {
            session: &session,
            flash_messages: &flash_messages,
            api: api.get_ref(),
            asset_types: asset_types.get_ref(),
            locale,
            tera: tera.get_ref(),
        },
    )
    .await
}

#[post("/asset-catalog/prev")]
pub async fn previous_page(
    session: Session,
    flash_messages: IncomingFlashMessages,
    api: web::Data<AssetClient>,
    asset_types: web::Data<AssetTypeCache>,
    locale: web::Data<LocaleCatalog>,
    tera: web::Data<Tera>,
) -> impl Responder {
    respond(
        SearchAction::Prev,
        SearchPage {
            session: &session,
            flash_messages: &flash_messages,
            api: api.get_ref(),
            asset_types: asset_types.get_ref(),
            locale,
            tera: tera.get_ref(),
        },
    )
    .await
}

#[post("/asset-catalog/page-size")]
pub async fn change_page_size(
    session: Session,
    flash_messages: IncomingFlashMessages,
    api: web::Data<AssetClient>,
    asset_types: web::Data<AssetTypeCache>,
    locale: web::Data<LocaleCatalog>,
    tera: web::Data<Tera>,
    form: web::Bytes,
) -> impl Responder {
    let page_size = serde_html_form::from_bytes::<PageSizeForm>(&form)
        .map_err(|err| err.to_string())
        .and_then(|form| PageSize::try_from(&form).map_err(|err| err.to_string()));

    let page_size = match page_size {
        Ok(page_size) => page_size,
        Err(err) => {
            log::error!("Failed to parse page size form: {err}");
            FlashMessage::error("Unsupported page size.").send();
            return redirect(SEARCH_PAGE);
        }
    };

    respond(
        SearchAction::ChangePageSize(page_size),
        SearchPage {
            session: &session,
            flash_messages: &flash_messages,
            api: api.get_ref(),
            asset_types: asset_types.get_ref(),
            locale,
            tera: tera.get_ref(),
        },
    )
    .await
}
