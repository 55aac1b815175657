use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::{redirect, render_template};
use tera::Tera;

use crate::forms::banners::{AddBannerForm, AddBannerFormPayload};
use crate::forms::categories::{AddCategoryForm, AddCategoryFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::base_context;
use crate::services::ServiceError;
use crate::services::admin::{
    AdminAccess, add_banner as add_banner_service, add_category as add_category_service,
    check_admin_access, delete_banner as delete_banner_service,
    show_admin_dashboard as show_admin_dashboard_service, toggle_banner as toggle_banner_service,
};

#[get("/admin")]
pub async fn show_admin(
    user: Option<AuthenticatedUser>,
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    // The page gate turns a missing role into a redirect; the service keeps its
    // own role check, so `Unauthorized` cannot come back from it here.
    let user = match check_admin_access(user.as_ref()) {
        AdminAccess::Granted(user) => user,
        AdminAccess::RedirectToLogin => return redirect(&server_config.auth_service_url),
        AdminAccess::RedirectToHome => return redirect("/"),
    };

    match show_admin_dashboard_service(user, repo.get_ref()) {
        Ok(dashboard) => {
            let mut context = base_context(&flash_messages, Some(user), "admin", &server_config);
            context.insert("banners", &dashboard.banners);
            context.insert("categories", &dashboard.categories);
            render_template(&tera, "admin/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render admin page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/admin/banners")]
pub async fn add_banner(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddBannerForm>,
) -> impl Responder {
    let payload: AddBannerFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/admin");
        }
    };

    match add_banner_service(payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Banner adicionado.").send(),
        Ok(false) => FlashMessage::error("Erro ao adicionar banner.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/"),
        Err(ServiceError::NotFound) => FlashMessage::error("Categoria não encontrada.").send(),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add banner: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/admin")
}

#[post("/admin/banners/{banner_id}/toggle")]
pub async fn toggle_banner(
    banner_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match toggle_banner_service(banner_id.into_inner(), &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Banner atualizado.").send(),
        Ok(false) => FlashMessage::error("Erro ao atualizar banner.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/"),
        Err(ServiceError::NotFound) => FlashMessage::error("Banner não encontrado.").send(),
        Err(err) => {
            log::error!("Failed to toggle banner: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/admin")
}

#[post("/admin/banners/{banner_id}/delete")]
pub async fn delete_banner(
    banner_id: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_banner_service(banner_id.into_inner(), &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Banner removido.").send(),
        Ok(false) => FlashMessage::error("Erro ao remover banner.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/"),
        Err(ServiceError::NotFound) => FlashMessage::error("Banner não encontrado.").send(),
        Err(err) => {
            log::error!("Failed to delete banner: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/admin")
}

#[post("/admin/categories")]
pub async fn add_category(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Form(form): web::Form<AddCategoryForm>,
) -> impl Responder {
    let payload: AddCategoryFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/admin");
        }
    };

    match add_category_service(payload, &user, repo.get_ref()) {
        Ok(true) => FlashMessage::success("Categoria adicionada.").send(),
        Ok(false) => FlashMessage::error("Erro ao adicionar categoria.").send(),
        Err(ServiceError::Unauthorized) => return redirect("/"),
        Err(ServiceError::Form(message)) => FlashMessage::error(message).send(),
        Err(err) => {
            log::error!("Failed to add category: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    }

    redirect("/admin")
}
