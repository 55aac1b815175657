use actix_web_flash_messages::IncomingFlashMessages;
use pushkind_common::domain::auth::AuthenticatedUser;
use pushkind_common::routes::alert_level_to_str;
use tera::Context;

use crate::models::config::ServerConfig;

pub mod admin;
pub mod api;
pub mod main;
pub mod products;

/// Template context shared by storefront pages.
///
/// Storefront pages are public, so unlike the admin-only helpers in
/// `pushkind-common` the user is optional here.
pub fn base_context(
    flash_messages: &IncomingFlashMessages,
    user: Option<&AuthenticatedUser>,
    current_page: &str,
    server_config: &ServerConfig,
) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_user", &user);
    context.insert("current_page", current_page);
    context.insert("login_url", &server_config.auth_service_url);
    context
}
