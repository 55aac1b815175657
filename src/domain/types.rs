//! Strongly-typed value objects used by storefront entities.
//!
//! Banners and categories carry these wrappers instead of raw primitives so
//! that identifiers, slugs and URLs are validated once at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// A new slug used characters outside `[a-z0-9_-]`.
    #[error("{0} may only contain lowercase letters, digits, '-' and '_'")]
    InvalidSlug(&'static str),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Shared string conversions for the text newtypes below.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_impls!($name);
    };
}

id_newtype!(BannerId, "Unique identifier for a banner.", "banner_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);

non_empty_string_newtype!(
    BannerTitle,
    "Banner display title enforcing non-empty values.",
    "banner title"
);
non_empty_string_newtype!(
    CategoryName,
    "Category display name enforcing non-empty values.",
    "category name"
);

url_string_newtype!(LinkUrl, "External destination of a banner.", "link url");

/// Banner image location: an absolute URL or a path served by this site
/// (`/assets/...`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Trims the value and accepts either a valid URL or a root-relative path.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "image url")?;
        let root_relative = trimmed.starts_with('/') && !trimmed.starts_with("//");
        if !root_relative && !trimmed.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl("image url"));
        }
        Ok(Self(trimmed))
    }
}

string_newtype_impls!(ImageUrl);

non_empty_string_newtype!(
    CategorySlug,
    "Short category identifier used in `/produtos?categoria=` links.",
    "category slug"
);

impl CategorySlug {
    /// Whether the slug only uses `[a-z0-9_-]`, the alphabet new slugs are
    /// created with.
    pub fn is_canonical(&self) -> bool {
        self.0
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    }
}

/// Position of a banner in the carousel. Any integer is allowed; lower values
/// are shown first.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrderPosition(i32);

impl OrderPosition {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for OrderPosition {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Display for OrderPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_banner_titles() {
        let value = BannerTitle::new("  Black Friday  ").unwrap();
        assert_eq!(value.as_str(), "Black Friday");
    }

    #[test]
    fn rejects_blank_titles() {
        assert_eq!(
            BannerTitle::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("banner title")
        );
    }

    #[test]
    fn rejects_non_positive_ids() {
        let err = BannerId::new(0).unwrap_err();
        assert_eq!(err, TypeConstraintError::NonPositiveId("banner_id"));
    }

    #[test]
    fn validates_urls() {
        assert!(LinkUrl::new("https://example.com/promo").is_ok());
        let err = ImageUrl::new("not-a-url").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("image url"));
    }

    #[test]
    fn accepts_root_relative_image_paths() {
        assert_eq!(
            ImageUrl::new(" /assets/b.jpg ").unwrap(),
            "/assets/b.jpg"
        );
        assert!(ImageUrl::new("https://cdn.example.com/b.jpg").is_ok());
        assert_eq!(
            ImageUrl::new("//cdn.example.com/b.jpg").unwrap_err(),
            TypeConstraintError::InvalidUrl("image url")
        );
    }

    #[test]
    fn accepts_plain_slugs() {
        let slug = CategorySlug::new(" smartphones ").unwrap();
        assert_eq!(slug, "smartphones");
        assert!(slug.is_canonical());
        assert!(CategorySlug::new("notebooks-gamer_2").unwrap().is_canonical());
    }

    #[test]
    fn keeps_stored_slugs_outside_the_new_slug_alphabet() {
        for raw in ["Smartphones", "tv&audio", "a b", "acessórios"] {
            let slug = CategorySlug::new(raw).unwrap();
            assert_eq!(slug, raw);
            assert!(!slug.is_canonical(), "{raw} is not canonical");
        }
        assert_eq!(
            CategorySlug::new("  ").unwrap_err(),
            TypeConstraintError::EmptyString("category slug")
        );
    }

    #[test]
    fn order_positions_compare_numerically() {
        assert!(OrderPosition::new(-1) < OrderPosition::new(0));
        assert!(OrderPosition::new(2) < OrderPosition::new(10));
    }
}
