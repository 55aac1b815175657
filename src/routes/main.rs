use actix_web::{Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::render_template;
use tera::{Context, Tera};

use crate::dto::banners::BannerCarousel;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::base_context;
use crate::services::banners::load_carousel;

#[get("/")]
pub async fn index(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let mut context = base_context(&flash_messages, user.as_ref(), "index", &server_config);
    // The page script swaps this placeholder for `/banners/carousel`.
    context.insert("carousel", &BannerCarousel::Loading);
    render_template(&tera, "main/index.html", &context)
}

/// Carousel fragment fetched once by the home page.
#[get("/banners/carousel")]
pub async fn banner_carousel(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let carousel = load_carousel(repo.get_ref());

    let mut context = Context::new();
    context.insert("carousel", &carousel);
    context.insert("autoplay_ms", &server_config.carousel_autoplay_ms);
    render_template(&tera, "banners/carousel.html", &context)
}
