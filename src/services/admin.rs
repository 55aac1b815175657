use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::check_role;
use serde::Serialize;

use crate::ADMIN_ROLE;
use crate::domain::types::BannerId;
use crate::dto::banners::BannerDto;
use crate::dto::categories::CategoryDto;
use crate::forms::banners::AddBannerFormPayload;
use crate::forms::categories::AddCategoryFormPayload;
use crate::repository::{BannerReader, BannerWriter, CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult};

/// Outcome of the admin page gate.
pub enum AdminAccess<'a> {
    Granted(&'a AuthenticatedUser),
    /// Nobody is signed in.
    RedirectToLogin,
    /// Signed in without the admin role.
    RedirectToHome,
}

/// Decide whether the current visitor may see the admin dashboard.
pub fn check_admin_access(user: Option<&AuthenticatedUser>) -> AdminAccess<'_> {
    match user {
        None => AdminAccess::RedirectToLogin,
        Some(user) if check_role(ADMIN_ROLE, &user.roles) => AdminAccess::Granted(user),
        Some(_) => AdminAccess::RedirectToHome,
    }
}

/// Role check every admin service runs first. The POST routes rely on it
/// alone; the dashboard page also goes through [`check_admin_access`].
fn require_admin(user: &AuthenticatedUser) -> ServiceResult<()> {
    if check_role(ADMIN_ROLE, &user.roles) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub banners: Vec<BannerDto>,
    pub categories: Vec<CategoryDto>,
}

/// Load all banners (active or not) and categories for the dashboard.
pub fn show_admin_dashboard<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<AdminDashboard>
where
    R: BannerReader + CategoryReader,
{
    require_admin(user)?;

    let banners = repo.list_banners().map_err(|e| {
        log::error!("Failed to list banners: {e}");
        ServiceError::Internal
    })?;

    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })?;

    Ok(AdminDashboard {
        banners: banners.into_iter().map(BannerDto::from).collect(),
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    })
}

pub fn add_banner<R>(
    payload: AddBannerFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: BannerWriter + CategoryReader,
{
    require_admin(user)?;

    if let Some(category_id) = payload.category_id {
        match repo.get_category_by_id(category_id) {
            Ok(Some(_)) => {}
            Ok(None) => return Err(ServiceError::NotFound),
            Err(e) => {
                log::error!("Failed to get category: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }

    match repo.create_banner(&payload.into_new_banner()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create banner: {e}");
            Ok(false)
        }
    }
}

/// Flip the active flag of a banner.
pub fn toggle_banner<R>(banner_id: i32, user: &AuthenticatedUser, repo: &R) -> ServiceResult<bool>
where
    R: BannerReader + BannerWriter,
{
    require_admin(user)?;

    let banner_id = BannerId::new(banner_id).map_err(|_| ServiceError::NotFound)?;

    let banner = match repo.get_banner_by_id(banner_id) {
        Ok(Some(banner)) => banner,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get banner: {e}");
            return Err(ServiceError::Internal);
        }
    };

    match repo.set_banner_active(banner.id, !banner.is_active) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to update banner: {e}");
            Ok(false)
        }
    }
}

pub fn delete_banner<R>(banner_id: i32, user: &AuthenticatedUser, repo: &R) -> ServiceResult<bool>
where
    R: BannerWriter,
{
    require_admin(user)?;

    let banner_id = BannerId::new(banner_id).map_err(|_| ServiceError::NotFound)?;

    match repo.delete_banner(banner_id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to delete banner: {e}");
            Ok(false)
        }
    }
}

pub fn add_category<R>(
    payload: AddCategoryFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<bool>
where
    R: CategoryReader + CategoryWriter,
{
    require_admin(user)?;

    match repo.get_category_by_slug(&payload.slug) {
        Ok(None) => {}
        Ok(Some(_)) => {
            return Err(ServiceError::Form(format!(
                "Categoria com slug '{}' já existe.",
                payload.slug
            )));
        }
        Err(e) => {
            log::error!("Failed to get category by slug: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.create_category(&payload.into_new_category()) {
        Ok(_) => Ok(true),
        Err(e) => {
            log::error!("Failed to create category: {e}");
            Ok(false)
        }
    }
}
