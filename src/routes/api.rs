use actix_web::{HttpResponse, Responder, get, post, web};

use crate::repository::DieselRepository;
use crate::services::banners::{
    click_banner as click_banner_service, list_active_banners as list_active_banners_service,
};

#[get("/v1/banners")]
pub async fn api_v1_banners(repo: web::Data<DieselRepository>) -> impl Responder {
    HttpResponse::Ok().json(list_active_banners_service(repo.get_ref()))
}

/// Resolve where a banner click should lead. Always answers 200; a banner
/// that cannot be resolved yields `{"action": "none"}`.
#[post("/v1/banners/{banner_id}/click")]
pub async fn api_v1_banner_click(
    banner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    HttpResponse::Ok().json(click_banner_service(banner_id.into_inner(), repo.get_ref()))
}
