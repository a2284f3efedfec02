#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_identity::IdentityMiddleware;
#[cfg(feature = "server")]
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
#[cfg(feature = "server")]
use actix_web::cookie::Key;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware as actix_middleware, web};
#[cfg(feature = "server")]
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "server")]
pub mod middleware;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

/// Role required to open any back-office screen.
pub const SERVICE_ACCESS_ROLE: &str = "sac";
/// Role allowed to manage reference data and see every pending item.
pub const SERVICE_ADMIN_ROLE: &str = "sac_admin";

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: crate::models::config::ServerConfig) -> std::io::Result<()> {
    use crate::db::establish_connection_pool;
    use crate::middleware::RedirectUnauthorized;
    use crate::repository::DieselRepository;
    use crate::routes::account::{account_contact, save_account, show_account, show_new_account};
    use crate::routes::api::{api_v1_dropdowns, api_v1_outlook_compose, api_v1_policies};
    use crate::routes::main::{logout, not_assigned, show_index};
    use crate::routes::policy::{save_policy, show_new_policy, show_next_mod, show_policy};
    use crate::routes::policy_type::{
        policy_type_contact, save_policy_type, show_new_policy_type, show_next_policy_type,
        show_policy_type, show_policy_types,
    };
    use crate::routes::program::{program_contact, save_program, show_new_program, show_program};
    use crate::routes::search::{search_accounts, search_policies, search_programs};

    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::from(server_config.secret.as_bytes());

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .cookie_domain(Some(format!(".{}", server_config.domain)))
                    .build(),
            )
            .wrap(actix_middleware::Compress::default())
            .wrap(actix_middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(not_assigned)
            .service(
                web::scope("/api")
                    .service(api_v1_dropdowns)
                    .service(api_v1_policies)
                    .service(api_v1_outlook_compose),
            )
            .service(
                web::scope("")
                    .wrap(RedirectUnauthorized)
                    .service(show_index)
                    .service(search_programs)
                    .service(search_accounts)
                    .service(search_policies)
                    .service(show_new_program)
                    .service(show_program)
                    .service(save_program)
                    .service(program_contact)
                    .service(show_new_account)
                    .service(show_account)
                    .service(save_account)
                    .service(account_contact)
                    .service(show_policy_types)
                    .service(show_new_policy_type)
                    .service(show_next_policy_type)
                    .service(show_policy_type)
                    .service(save_policy_type)
                    .service(policy_type_contact)
                    .service(show_new_policy)
                    .service(show_next_mod)
                    .service(show_policy)
                    .service(save_policy)
                    .service(logout),
            )
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
