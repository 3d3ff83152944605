//! Settings page round trip and its effect on the prospect list rendering.

mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};

use bindline::handlers;
use bindline::models::setting::SettingsStore;
use common::{seeded_store, session_middleware};

#[actix_rt::test]
async fn saving_settings_updates_the_store_and_redirects() {
    let settings = web::Data::new(SettingsStore::new());
    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .app_data(settings.clone())
            .route("/settings", web::get().to(handlers::settings_handlers::list))
            .route("/settings", web::post().to(handlers::settings_handlers::save)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/settings")
        .insert_header(("content-type", "application/x-www-form-urlencoded"))
        .set_payload("setting_app.name=Acme+Portal&setting_pipeline.show_labels=false&setting_bogus=x")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    assert_eq!(settings.get_value("app.name", ""), "Acme Portal");
    assert_eq!(settings.get_value("pipeline.show_labels", ""), "false");

    let req = test::TestRequest::get().uri("/settings").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("Acme Portal"));
}

#[actix_rt::test]
async fn dashboard_counts_one_prospect_per_seeded_stage() {
    let store = web::Data::new(seeded_store());
    let settings = web::Data::new(SettingsStore::new());
    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .app_data(store.clone())
            .app_data(settings.clone())
            .route("/dashboard", web::get().to(handlers::dashboard::index)),
    )
    .await;

    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();

    assert!(body.contains("5 prospect(s) in the pipeline"));
    // One card per canonical stage, each linking to the filtered list.
    for stage in ["docs", "form", "submitted", "quotes", "bound"] {
        assert!(body.contains(&format!("/prospects?stage={stage}")));
    }
}

#[actix_rt::test]
async fn list_variant_setting_switches_the_progress_style() {
    let store = web::Data::new(seeded_store());
    let settings = web::Data::new(SettingsStore::new());
    settings.update_value("pipeline.list_variant", "horizontal");

    let app = test::init_service(
        App::new()
            .wrap(session_middleware())
            .app_data(store.clone())
            .app_data(settings.clone())
            .route("/prospects", web::get().to(handlers::prospect_handlers::list)),
    )
    .await;

    let req = test::TestRequest::get().uri("/prospects").to_request();
    let body = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(body.contains("progress-horizontal"));
    assert!(!body.contains("progress-compact"));
    // Horizontal bars show the short labels by default.
    assert!(body.contains("stage-label"));
}
