use serde::Serialize;

use crate::domain::banner::Banner;

/// Banner as rendered by templates and returned by the JSON API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BannerDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub category_id: Option<i32>,
    pub is_active: bool,
    pub order_position: i32,
}

impl From<Banner> for BannerDto {
    fn from(value: Banner) -> Self {
        Self {
            id: value.id.get(),
            title: value.title.into_inner(),
            image_url: value.image_url.into_inner(),
            link_url: value.link_url.map(|url| url.into_inner()),
            category_id: value.category_id.map(|id| id.get()),
            is_active: value.is_active,
            order_position: value.order_position.get(),
        }
    }
}

/// What the carousel shows.
///
/// `Loading` is rendered by the page before its single fetch completes;
/// a finished fetch is either `Ready` with at least one slide or `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "banners", rename_all = "snake_case")]
pub enum BannerCarousel {
    Loading,
    Ready(Vec<BannerDto>),
    Empty,
}

impl BannerCarousel {
    pub fn from_banners(banners: Vec<Banner>) -> Self {
        if banners.is_empty() {
            Self::Empty
        } else {
            Self::Ready(banners.into_iter().map(BannerDto::from).collect())
        }
    }

    /// Slides in display order; empty unless `Ready`.
    pub fn slides(&self) -> &[BannerDto] {
        match self {
            Self::Ready(slides) => slides,
            Self::Loading | Self::Empty => &[],
        }
    }
}
