use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::render_template;
use serde::Deserialize;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::base_context;
use crate::services::products::show_product_listing as show_product_listing_service;

#[derive(Deserialize)]
struct ProductsQueryParams {
    categoria: Option<String>,
}

#[get("/produtos")]
pub async fn show_products(
    params: web::Query<ProductsQueryParams>,
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_product_listing_service(params.categoria.as_deref(), repo.get_ref()) {
        Ok(listing) => {
            let mut context =
                base_context(&flash_messages, user.as_ref(), "products", &server_config);
            context.insert("listing", &listing);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render products page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
