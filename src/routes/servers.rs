use actix_web::http::header::ContentDisposition;
use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Serialize;
use tera::Tera;

use crate::forms::server_config::{NewServerForm, ServerConfigField};
use crate::routes::{base_context, redirect, render_template};
use crate::services::{ServiceError, server_author};

const NEW_SERVER_PAGE: &str = "/servers/new";

#[derive(Serialize)]
struct FieldInput {
    name: &'static str,
    label: &'static str,
    secret: bool,
}

#[get("/servers/new")]
pub async fn show_new_server(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let fields = ServerConfigField::REQUIRED
        .into_iter()
        .map(|field| FieldInput {
            name: field.input_name(),
            label: field.label(),
            secret: field == ServerConfigField::LocalPassword,
        })
        .collect::<Vec<_>>();

    let mut context = base_context(&flash_messages, "servers");
    context.insert("fields", &fields);

    render_template(&tera, "servers/new.html", &context)
}

#[post("/servers/new")]
pub async fn create_server_config(form: web::Bytes) -> impl Responder {
    let form: NewServerForm = match serde_html_form::from_bytes(&form) {
        Ok(form) => form,
        Err(err) => {
            log::error!("Failed to parse new server form: {err}");
            FlashMessage::error("Malformed server form.").send();
            return redirect(NEW_SERVER_PAGE);
        }
    };

    match server_author::generate_server_config(&form) {
        Ok(config) => HttpResponse::Ok()
            .insert_header(ContentDisposition::attachment(config.file_name()))
            .json(config),
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect(NEW_SERVER_PAGE)
        }
        Err(err) => {
            log::error!("Failed to generate server configuration: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
