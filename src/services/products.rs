use serde::Serialize;

use crate::domain::types::CategorySlug;
use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

/// Data for the product listing page shell.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListing {
    /// Category selected through `?categoria=`, if it exists.
    pub selected: Option<CategoryDto>,
    pub categories: Vec<CategoryDto>,
}

/// Resolve the `categoria` query parameter of the listing page.
///
/// Unknown or blank slugs show the unfiltered listing.
pub fn show_product_listing<R>(slug: Option<&str>, repo: &R) -> ServiceResult<ProductListing>
where
    R: CategoryReader,
{
    let categories = repo.list_categories().map_err(|e| {
        log::error!("Failed to list categories: {e}");
        ServiceError::Internal
    })?;

    let slug = slug.and_then(|raw| match CategorySlug::new(raw) {
        Ok(slug) => Some(slug),
        Err(e) => {
            log::warn!("Ignoring category filter '{raw}': {e}");
            None
        }
    });

    let selected = slug.and_then(|slug| {
        categories
            .iter()
            .find(|category| category.slug == slug)
            .cloned()
            .map(CategoryDto::from)
    });

    Ok(ProductListing {
        selected,
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    })
}
