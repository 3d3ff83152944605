use std::sync::Arc;
use std::time::Duration;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use bindline::extraction::{BusinessExtractor, MockExtractor};
use bindline::handlers;
use bindline::models::prospect::ProspectStore;
use bindline::models::setting::SettingsStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let settings = web::Data::new(SettingsStore::new());
    if let Ok(name) = std::env::var("APP_NAME") {
        settings.set_app_name(&name);
    }

    // In-memory prospect source, seeded with demo data
    let store = web::Data::new(ProspectStore::new());
    store.seed_demo();

    // The mocked extraction collaborator; the delay stands in for a slow
    // external service
    let delay_ms: u64 = std::env::var("EXTRACTION_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1500);
    let extractor: Arc<dyn BusinessExtractor> = Arc::new(MockExtractor::new(
        Duration::from_millis(delay_ms),
    ));
    let extractor = web::Data::from(extractor);

    // Session cookie key: only flash messages live in the session. Load
    // SESSION_KEY to keep them valid across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+), generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => Key::generate(),
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(settings.clone())
            .app_data(extractor.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Root redirect
            .route("/", web::get().to(|| async {
                actix_web::HttpResponse::SeeOther()
                    .insert_header(("Location", "/prospects"))
                    .finish()
            }))
            .route("/dashboard", web::get().to(handlers::dashboard::index))
            // Prospect CRUD; /prospects/new BEFORE /prospects/{id} to avoid routing conflict
            .route("/prospects", web::get().to(handlers::prospect_handlers::list))
            .route("/prospects/new", web::get().to(handlers::prospect_handlers::new_form))
            .route("/prospects", web::post().to(handlers::prospect_handlers::create))
            .route("/prospects/{id}", web::get().to(handlers::prospect_handlers::detail))
            .route("/prospects/{id}/stage", web::post().to(handlers::prospect_handlers::advance))
            .route("/prospects/{id}/delete", web::post().to(handlers::prospect_handlers::delete))
            // Settings
            .route("/settings", web::get().to(handlers::settings_handlers::list))
            .route("/settings", web::post().to(handlers::settings_handlers::save))
            // Extraction JSON API
            .route("/api/extract", web::post().to(handlers::extraction_handlers::extract))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
