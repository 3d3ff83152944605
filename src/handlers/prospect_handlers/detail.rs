use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::models::prospect::ProspectStore;
use crate::models::setting::SettingsStore;
use crate::pipeline::Stage;
use crate::pipeline::view::{ProgressBarView, Size, TimelineView, Variant};
use crate::templates_structs::{PageContext, ProspectDetail, ProspectDetailTemplate};

#[derive(Deserialize)]
pub struct HighlightQuery {
    stage: Option<String>,
    highlight: Option<String>,
}

impl HighlightQuery {
    /// The stage to emphasize as "being viewed". Only honored when
    /// `highlight=true`; a non-canonical stage id is a no-op.
    fn active_viewing(&self) -> Option<Stage> {
        if self.highlight.as_deref() != Some("true") {
            return None;
        }
        self.stage.as_deref().and_then(Stage::parse)
    }
}

pub async fn detail(
    store: web::Data<ProspectStore>,
    settings: web::Data<SettingsStore>,
    session: Session,
    path: web::Path<i64>,
    query: web::Query<HighlightQuery>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let prospect = store.find(id).ok_or(AppError::NotFound)?;

    let ctx = PageContext::build(&session, &settings, "/prospects");
    let current = prospect.current_stage();
    let active_viewing = query.active_viewing();

    let bar = ProgressBarView::build(id, current, active_viewing, Variant::Interactive, Size::Lg, true);
    let timeline = TimelineView::build(id, current, active_viewing, &prospect.history);

    let tmpl = ProspectDetailTemplate {
        ctx,
        prospect: ProspectDetail::build(&prospect),
        bar,
        timeline,
    };
    render(tmpl)
}
