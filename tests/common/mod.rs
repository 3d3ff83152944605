//! Shared test infrastructure.
//!
//! Handler tests build a minimal actix app with exactly the routes under
//! test; this module provides the shared pieces (seeded store, session
//! middleware for flash messages).

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;

use bindline::models::prospect::{NewProspect, ProspectStore};

/// A store with one prospect per pipeline stage (the demo seed).
pub fn seeded_store() -> ProspectStore {
    let store = ProspectStore::new();
    store.seed_demo();
    store
}

/// A store with a single prospect at the first stage. Returns (store, id).
pub fn single_prospect_store() -> (ProspectStore, i64) {
    let store = ProspectStore::new();
    let p = store.insert(NewProspect {
        business_name: "Acme Widgets".to_string(),
        contact_name: "Sam Acme".to_string(),
        contact_email: "sam@acmewidgets.com".to_string(),
        website: Some("https://acmewidgets.com".to_string()),
        revenue: 750_000,
        renewal_date: None,
        send_portal_link: false,
    });
    let id = p.id;
    (store, id)
}

/// Cookie session middleware matching the app's configuration; only flash
/// messages live in it.
pub fn session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}
