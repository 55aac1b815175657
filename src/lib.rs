//! Core library exports for the KECINFORSTORE storefront.
//!
//! The `data` feature exposes the domain types, Diesel models and
//! repositories; `server` adds forms, services and the Actix-web routes that
//! serve the banner carousel and the admin dashboard.

/// Role required to open the admin dashboard.
pub const ADMIN_ROLE: &str = "admin";

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
