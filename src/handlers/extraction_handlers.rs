use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::{BusinessExtractor, ExtractError};
use crate::validate;

#[derive(Deserialize)]
pub struct ExtractRequest {
    pub website: String,
}

/// JSON endpoint behind the intake form's "extract from website" assist.
///
/// Malformed input is rejected before the service is invoked; service
/// failures come back as retriable errors with the form state untouched
/// (the client only fills fields on success).
pub async fn extract(
    extractor: web::Data<dyn BusinessExtractor>,
    payload: web::Json<ExtractRequest>,
) -> Result<HttpResponse, AppError> {
    if let Some(msg) = validate::validate_website(&payload.website) {
        return Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": msg,
            "field": "website",
        })));
    }

    match extractor.extract(payload.website.trim()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(ExtractError::InvalidUrl) => {
            Ok(HttpResponse::UnprocessableEntity().json(serde_json::json!({
                "error": "Website must be a valid URL (e.g. https://example.com)",
                "field": "website",
            })))
        }
        Err(e) => {
            log::warn!("Extraction failed for '{}': {e}", payload.website);
            Ok(HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Extraction service is unavailable, please try again",
            })))
        }
    }
}
