use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::models::prospect::ProspectStore;
use crate::models::setting::SettingsStore;
use crate::pipeline::view::Variant;
use crate::templates_structs::{DashboardTemplate, PageContext, ProspectRow, StageCard};

pub async fn index(
    store: web::Data<ProspectStore>,
    settings: web::Data<SettingsStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &settings, "/dashboard");

    let stage_cards = store
        .stage_counts()
        .into_iter()
        .map(|(stage, count)| StageCard {
            label: stage.label(),
            icon: stage.icon(),
            count,
            filter_href: format!("/prospects?stage={}", stage.id()),
        })
        .collect();

    let prospects = store.list(None, None);
    let recent = prospects
        .iter()
        .take(5)
        .map(|p| ProspectRow::build(p, Variant::Compact, false))
        .collect();

    let tmpl = DashboardTemplate {
        ctx,
        stage_cards,
        total_count: prospects.len(),
        recent,
    };
    render(tmpl)
}
