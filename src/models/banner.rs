use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::banner::{Banner as DomainBanner, NewBanner as DomainNewBanner};
use crate::domain::types::{
    BannerTitle, CategoryId, ImageUrl, LinkUrl, OrderPosition, TypeConstraintError,
};

/// Diesel model representing the `banners` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::banners)]
pub struct Banner {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub order_position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Banner`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::banners)]
pub struct NewBanner {
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub order_position: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Banner> for DomainBanner {
    type Error = TypeConstraintError;

    fn try_from(banner: Banner) -> Result<Self, Self::Error> {
        Ok(Self {
            id: banner.id.try_into()?,
            title: BannerTitle::new(banner.title)?,
            image_url: ImageUrl::new(banner.image_url)?,
            // Rows edited outside the admin form may store '' for "no link".
            link_url: banner
                .link_url
                .filter(|url| !url.trim().is_empty())
                .map(LinkUrl::new)
                .transpose()?,
            category_id: banner.category_id.map(CategoryId::new).transpose()?,
            is_active: banner.is_active,
            order_position: OrderPosition::new(banner.order_position),
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        })
    }
}

impl From<DomainNewBanner> for NewBanner {
    fn from(banner: DomainNewBanner) -> Self {
        Self {
            title: banner.title.into_inner(),
            image_url: banner.image_url.into_inner(),
            link_url: banner.link_url.map(LinkUrl::into_inner),
            category_id: banner.category_id.map(|id| id.get()),
            is_active: banner.is_active,
            order_position: banner.order_position.get(),
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn row(link_url: Option<&str>, image_url: &str) -> Banner {
        let now = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Banner {
            id: 1,
            title: "Promo".to_string(),
            image_url: image_url.to_string(),
            link_url: link_url.map(str::to_string),
            category_id: None,
            is_active: true,
            order_position: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn blank_link_means_no_link() {
        for link in ["", "   "] {
            let banner = DomainBanner::try_from(row(Some(link), "/assets/b.jpg")).unwrap();
            assert_eq!(banner.link_url, None);
            assert_eq!(banner.image_url, "/assets/b.jpg");
        }
    }

    #[test]
    fn malformed_link_is_still_rejected() {
        let err = DomainBanner::try_from(row(Some("promo"), "/assets/b.jpg")).unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("link url"));
    }
}
