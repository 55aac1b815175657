use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName, CategorySlug};

/// Product grouping that banners may point to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub slug: CategorySlug,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
