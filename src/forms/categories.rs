use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryName, CategorySlug, TypeConstraintError};

#[derive(Deserialize, Validate)]
pub struct AddCategoryForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddCategoryFormPayload {
    pub name: CategoryName,
    pub slug: CategorySlug,
}

impl AddCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        let now = Utc::now().naive_utc();
        NewCategory {
            name: self.name,
            slug: self.slug,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddCategoryFormError {
    #[error("Add category form validation failed: {0}")]
    Validation(String),
    #[error("Add category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddCategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddCategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddCategoryForm> for AddCategoryFormPayload {
    type Error = AddCategoryFormError;

    fn try_from(value: AddCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;

        // Slugs are stored lowercase; editors often type "Smartphones".
        let slug = CategorySlug::new(value.slug.trim().to_lowercase())?;
        if !slug.is_canonical() {
            return Err(TypeConstraintError::InvalidSlug("category slug").into());
        }

        Ok(Self {
            name: CategoryName::new(value.name)?,
            slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_slug() {
        let payload = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: "Smartphones".to_string(),
            slug: " Smartphones ".to_string(),
        })
        .unwrap();
        assert_eq!(payload.slug, "smartphones");
    }

    #[test]
    fn rejects_slug_with_spaces() {
        let result = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: "TV e Áudio".to_string(),
            slug: "tv e audio".to_string(),
        });
        assert!(matches!(result, Err(AddCategoryFormError::TypeConstraint(_))));
    }

    #[test]
    fn rejects_accented_slug() {
        let result = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: "Acessórios".to_string(),
            slug: "acessórios".to_string(),
        });
        assert!(matches!(result, Err(AddCategoryFormError::TypeConstraint(_))));
    }

    #[test]
    fn rejects_empty_name() {
        let result = AddCategoryFormPayload::try_from(AddCategoryForm {
            name: String::new(),
            slug: "tv".to_string(),
        });
        assert!(matches!(result, Err(AddCategoryFormError::Validation(_))));
    }
}
