use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::flash::set_flash;
use crate::models::setting::SettingsStore;
use crate::templates_structs::{PageContext, SettingsTemplate};

/// Decode a URL-encoded string (form data): `+` → space, `%HH` → byte.
fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let mut out = Vec::with_capacity(s.len());
    let b = s.as_bytes();
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            if let Ok(byte) = u8::from_str_radix(&s[i + 1..i + 3], 16) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Parse URL-encoded form body into key-value pairs. Setting names contain
/// dots, so the body is parsed by hand instead of into a fixed struct.
fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

pub async fn list(
    settings: web::Data<SettingsStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &settings, "/settings");
    let tmpl = SettingsTemplate {
        ctx,
        settings: settings.find_all(),
    };
    render(tmpl)
}

pub async fn save(
    settings: web::Data<SettingsStore>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let params = parse_form_body(&body);

    // Each setting is submitted as setting_<name>=<value>
    let mut changed = 0;
    for (key, value) in &params {
        if let Some(name) = key.strip_prefix("setting_") {
            if settings.update_value(name, value.trim()) {
                changed += 1;
            }
        }
    }

    set_flash(&session, &format!("Updated {changed} setting(s)"));
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/settings"))
        .finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_decode_handles_plus_and_percent() {
        assert_eq!(url_decode("a+b%21"), "a b!");
        assert_eq!(url_decode("plain"), "plain");
    }

    #[test]
    fn form_body_parses_dotted_keys() {
        let pairs = parse_form_body("setting_app.name=Bindline+East&setting_pipeline.show_labels=true");
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("setting_app.name".to_string(), "Bindline East".to_string()));
    }
}
