use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::forms::server_config::NewServerForm;
use crate::services::{ServiceError, server_author};

#[post("/v1/servers/config")]
pub async fn api_v1_server_config(web::Json(form): web::Json<NewServerForm>) -> impl Responder {
    match server_author::generate_server_config(&form) {
        Ok(config) => HttpResponse::Ok().json(config),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to generate server configuration: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
