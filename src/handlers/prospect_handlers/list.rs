use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::prospect::ProspectStore;
use crate::models::setting::SettingsStore;
use crate::pipeline::Stage;
use crate::pipeline::view::Variant;
use crate::templates_structs::{PageContext, ProspectListTemplate, ProspectRow, stage_options};

#[derive(Deserialize)]
pub struct ListQuery {
    q: Option<String>,
    stage: Option<String>,
}

pub async fn list(
    store: web::Data<ProspectStore>,
    settings: web::Data<SettingsStore>,
    session: Session,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &settings, "/prospects");

    // An unknown stage filter id simply filters nothing out of order; it
    // parses to None and the full list renders.
    let stage_filter = query.stage.as_deref().and_then(Stage::parse);

    let variant = Variant::parse(&settings.get_value("pipeline.list_variant", "compact"))
        .unwrap_or(Variant::Compact);
    let show_labels = settings.get_value("pipeline.show_labels", "true") == "true";

    let prospects = store.list(query.q.as_deref(), stage_filter);
    let rows: Vec<ProspectRow> = prospects
        .iter()
        .map(|p| ProspectRow::build(p, variant, show_labels))
        .collect();

    let tmpl = ProspectListTemplate {
        ctx,
        total_count: rows.len(),
        rows,
        search_query: query.q.clone().unwrap_or_default(),
        stage_options: stage_options(stage_filter),
    };
    render(tmpl)
}
