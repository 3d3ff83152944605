use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::flash::set_flash;
use crate::models::prospect::ProspectStore;
use crate::pipeline::Stage;

#[derive(Deserialize)]
pub struct StageForm {
    pub stage: String,
}

/// Move a prospect to another pipeline stage. The stage id must be
/// canonical; anything else flashes an error and changes nothing.
pub async fn advance(
    store: web::Data<ProspectStore>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<StageForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let Some(stage) = Stage::parse(&form.stage) else {
        set_flash(&session, &format!("'{}' is not a pipeline stage", form.stage));
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", format!("/prospects/{id}")))
            .finish());
    };

    if !store.set_stage(id, stage) {
        return Err(AppError::NotFound);
    }

    set_flash(&session, &format!("Moved to {}", stage.label()));
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/prospects/{id}")))
        .finish())
}
