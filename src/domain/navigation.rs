//! Destinations a banner click can resolve to.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::domain::types::{CategorySlug, LinkUrl};

/// Path of the product listing page banners navigate to.
pub const PRODUCT_LISTING_PATH: &str = "/produtos";
/// Query parameter carrying the category slug on the listing page.
pub const CATEGORY_QUERY_PARAM: &str = "categoria";

/// Where the shopper should be taken after clicking a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BannerTarget {
    /// Client-side navigation to a path inside the storefront.
    Navigate { path: String },
    /// Open an external URL in a new browsing context.
    Open { url: String },
    /// Nothing to do.
    None,
}

impl BannerTarget {
    /// Product listing filtered by the given category. The slug is
    /// form-encoded, so stored slugs with spaces or accents stay intact.
    pub fn category_listing(slug: &CategorySlug) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(CATEGORY_QUERY_PARAM, slug.as_str())
            .finish();
        Self::Navigate {
            path: format!("{PRODUCT_LISTING_PATH}?{query}"),
        }
    }

    pub fn external(url: &LinkUrl) -> Self {
        Self::Open {
            url: url.as_str().to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
