use actix_files::Files;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use pushkind_common::db::establish_connection_pool;
use pushkind_common::models::config::CommonServerConfig;
use tera::Tera;

use kecinfor_store::models::config::ServerConfig;
use kecinfor_store::repository::DieselRepository;
use kecinfor_store::routes::admin::{
    add_banner, add_category, delete_banner, show_admin, toggle_banner,
};
use kecinfor_store::routes::api::{api_v1_banner_click, api_v1_banners};
use kecinfor_store::routes::main::{banner_carousel, index};
use kecinfor_store::routes::products::show_products;

/// `Key::derive_from` needs at least this much key material.
const MIN_SECRET_LEN: usize = 32;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load server config: {e}");
            std::process::exit(1);
        }
    };

    if server_config.secret.len() < MIN_SECRET_LEN {
        log::error!("Secret must be at least {MIN_SECRET_LEN} bytes long");
        std::process::exit(1);
    }

    let common_config = CommonServerConfig {
        auth_service_url: server_config.auth_service_url.clone(),
        secret: server_config.secret.clone(),
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    let tera = match Tera::new(&format!("{}/**/*", server_config.templates_dir)) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let secret_key = Key::derive_from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting storefront on {}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.static_dir))
            .service(
                web::scope("/api")
                    .service(api_v1_banners)
                    .service(api_v1_banner_click),
            )
            .service(index)
            .service(banner_carousel)
            .service(show_products)
            .service(show_admin)
            .service(add_banner)
            .service(toggle_banner)
            .service(delete_banner)
            .service(add_category)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
            .app_data(web::Data::new(common_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
