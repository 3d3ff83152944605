use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::AppError;
use crate::flash::set_flash;
use crate::models::prospect::ProspectStore;

pub async fn delete(
    store: web::Data<ProspectStore>,
    session: Session,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    if !store.delete(id) {
        return Err(AppError::NotFound);
    }
    set_flash(&session, "Prospect deleted");
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/prospects"))
        .finish())
}
