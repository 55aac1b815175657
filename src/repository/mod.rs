use pushkind_common::db::{DbConnection, DbPool};
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::banner::{Banner, NewBanner};
use crate::domain::category::{Category, NewCategory};
use crate::domain::types::{BannerId, CategoryId, CategorySlug};

pub mod banner;
pub mod category;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for banner entities.
pub trait BannerReader {
    /// Active banners ordered by `order_position`, ties broken by id.
    fn list_active_banners(&self) -> RepositoryResult<Vec<Banner>>;
    /// Every banner regardless of the active flag, in display order.
    fn list_banners(&self) -> RepositoryResult<Vec<Banner>>;
    /// Retrieve a banner by its identifier.
    fn get_banner_by_id(&self, id: BannerId) -> RepositoryResult<Option<Banner>>;
}

/// Write operations for banner entities.
pub trait BannerWriter {
    /// Persist a new banner.
    fn create_banner(&self, banner: &NewBanner) -> RepositoryResult<usize>;
    /// Set the active flag of a banner.
    fn set_banner_active(&self, id: BannerId, is_active: bool) -> RepositoryResult<usize>;
    /// Delete a banner by id.
    fn delete_banner(&self, id: BannerId) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Retrieve a category by its slug.
    fn get_category_by_slug(&self, slug: &CategorySlug) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<usize>;
}
