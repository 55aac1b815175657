use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::banner::NewBanner;
use crate::domain::types::{
    BannerTitle, CategoryId, ImageUrl, LinkUrl, OrderPosition, TypeConstraintError,
};

/// Empty inputs from optional HTML fields are treated as absent.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize, Validate)]
pub struct AddBannerForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image_url: String,
    pub link_url: Option<String>,
    /// Raw `<select>` value; empty means "no category".
    pub category_id: Option<String>,
    /// Raw number input; a cleared field submits an empty string.
    pub order_position: Option<String>,
    /// Checkbox: present when ticked.
    pub is_active: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddBannerFormPayload {
    pub title: BannerTitle,
    pub image_url: ImageUrl,
    pub link_url: Option<LinkUrl>,
    pub category_id: Option<CategoryId>,
    pub order_position: OrderPosition,
    pub is_active: bool,
}

impl AddBannerFormPayload {
    pub fn into_new_banner(self) -> NewBanner {
        let now = Utc::now().naive_utc();
        NewBanner {
            title: self.title,
            image_url: self.image_url,
            link_url: self.link_url,
            category_id: self.category_id,
            is_active: self.is_active,
            order_position: self.order_position,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddBannerFormError {
    #[error("Add banner form validation failed: {0}")]
    Validation(String),
    #[error("Add banner form contains invalid data: {0}")]
    TypeConstraint(String),
    #[error("Add banner form contains an invalid category: {0}")]
    InvalidCategory(String),
    #[error("Add banner form contains an invalid order position: {0}")]
    InvalidOrderPosition(String),
}

impl From<ValidationErrors> for AddBannerFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddBannerFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddBannerForm> for AddBannerFormPayload {
    type Error = AddBannerFormError;

    fn try_from(value: AddBannerForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let category_id = match non_blank(value.category_id) {
            Some(raw) => {
                let id = raw
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| AddBannerFormError::InvalidCategory(raw.clone()))?;
                Some(CategoryId::new(id)?)
            }
            None => None,
        };

        let order_position = match non_blank(value.order_position) {
            Some(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| AddBannerFormError::InvalidOrderPosition(raw.clone()))?,
            None => 0,
        };

        Ok(Self {
            title: BannerTitle::new(value.title)?,
            image_url: ImageUrl::new(value.image_url)?,
            link_url: non_blank(value.link_url).map(LinkUrl::new).transpose()?,
            category_id,
            order_position: OrderPosition::new(order_position),
            is_active: value.is_active.is_some(),
        })
    }
}
