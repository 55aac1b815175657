use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{BannerId, BannerTitle, CategoryId, ImageUrl, LinkUrl, OrderPosition};

/// Promotional slide shown in the home page carousel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub title: BannerTitle,
    pub image_url: ImageUrl,
    /// External destination opened in a new browsing context.
    pub link_url: Option<LinkUrl>,
    /// Category whose listing page the banner leads to. Takes precedence
    /// over `link_url`.
    pub category_id: Option<CategoryId>,
    pub is_active: bool,
    pub order_position: OrderPosition,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Banner`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBanner {
    pub title: BannerTitle,
    pub image_url: ImageUrl,
    pub link_url: Option<LinkUrl>,
    pub category_id: Option<CategoryId>,
    pub is_active: bool,
    pub order_position: OrderPosition,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
