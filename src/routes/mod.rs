//! Actix-web handlers and the helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use tera::{Context, Tera};

use crate::domain::notification::NotificationLevel;

pub mod api;
pub mod main;
pub mod search;
pub mod servers;

/// Maps a flash message level to the CSS alert class used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// Maps a notification level to the CSS alert class used by the templates.
pub fn notification_level_to_str(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Error => "danger",
        NotificationLevel::Warning => "warning",
        NotificationLevel::Success => "success",
        NotificationLevel::Info => "info",
    }
}

/// Flash messages as `(text, alert class)` pairs.
pub fn flash_alerts(flash_messages: &IncomingFlashMessages) -> Vec<(String, &'static str)> {
    flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect()
}

/// Template context with the alerts and navigation entry every page needs.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let mut context = Context::new();
    context.insert("alerts", &flash_alerts(flash_messages));
    context.insert("current_page", current_page);
    context
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}
