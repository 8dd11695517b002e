#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::clients::assets::AssetClient;
#[cfg(feature = "server")]
use crate::i18n::LocaleCatalog;
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::routes::api::api_v1_server_config;
#[cfg(feature = "server")]
use crate::routes::main::show_index;
#[cfg(feature = "server")]
use crate::routes::search::{
    AssetTypeCache, change_page_size, next_page, previous_page, search_assets, show_search,
};
#[cfg(feature = "server")]
use crate::routes::servers::{create_server_config, show_new_server};

#[cfg(feature = "server")]
pub mod clients;
pub mod domain;
pub mod dto;
mod error_conversions;
pub mod forms;
pub mod i18n;
#[cfg(feature = "server")]
pub mod models;
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// Every route and shared resource is registered here; nothing is registered
/// as a side effect of loading a module.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api = AssetClient::new(&server_config.api_base_url, server_config.request_timeout())
        .map_err(|e| std::io::Error::other(format!("Failed to build asset client: {e}")))?
        .with_token(server_config.api_token.clone());

    let mut locale = LocaleCatalog::new(server_config.default_language.as_str());
    if let Err(err) = locale.load_language_dir(&server_config.locales_dir) {
        log::warn!("Falling back to built-in messages: {err}");
    }

    // Keys and stores for sessions and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let api = web::Data::new(api);
    let locale = web::Data::new(locale);
    let asset_types = web::Data::new(AssetTypeCache::default());
    let bind_address = (server_config.address.clone(), server_config.port);

    log::info!(
        "Serving UI on {}:{} against {}",
        server_config.address,
        server_config.port,
        server_config.api_base_url
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(web::scope("/api").service(api_v1_server_config))
            .service(show_index)
            .service(show_search)
            .service(search_assets)
            .service(next_page)
            .service(previous_page)
            .service(change_page_size)
            .service(show_new_server)
            .service(create_server_config)
            .app_data(web::Data::new(tera.clone()))
            .app_data(api.clone())
            .app_data(asset_types.clone())
            .app_data(locale.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
