use actix_session::Session;
use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::errors::{AppError, render};
use crate::flash::set_flash;
use crate::models::prospect::{NewProspect, ProspectStore};
use crate::models::setting::SettingsStore;
use crate::templates_structs::{
    PageContext, ProspectFormErrors, ProspectFormTemplate, ProspectFormValues,
};
use crate::validate;

/// Intake form fields. `action` distinguishes the two submit buttons:
/// "draft" saves quietly, "send" also generates and sends a portal link.
#[derive(Deserialize)]
pub struct ProspectForm {
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: String,
    pub revenue: String,
    pub renewal_date: String,
    pub action: String,
}

pub async fn new_form(
    settings: web::Data<SettingsStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session, &settings, "/prospects");
    let tmpl = ProspectFormTemplate {
        ctx,
        form_action: "/prospects".to_string(),
        form_title: "New Prospect".to_string(),
        values: ProspectFormValues::default(),
        errors: ProspectFormErrors::default(),
    };
    render(tmpl)
}

/// Parse a revenue field: digits with optional '$', ',' and whitespace.
/// Empty input is accepted as zero.
fn parse_revenue(raw: &str) -> Result<i64, String> {
    let cleaned: String = raw.chars().filter(|c| !matches!(c, '$' | ',' | ' ')).collect();
    if cleaned.is_empty() {
        return Ok(0);
    }
    cleaned
        .parse::<i64>()
        .map_err(|_| "Revenue must be a whole dollar amount".to_string())
}

fn validate_form(form: &ProspectForm) -> (ProspectFormErrors, i64) {
    let mut errors = ProspectFormErrors::default();
    if let Some(msg) = validate::validate_required(&form.business_name, "Business name", 120) {
        errors.business_name = msg;
    }
    if let Some(msg) = validate::validate_required(&form.contact_name, "Owner name", 120) {
        errors.contact_name = msg;
    }
    if let Some(msg) = validate::validate_email(&form.contact_email) {
        errors.contact_email = msg;
    }
    if let Some(msg) = validate::validate_website(&form.website) {
        errors.website = msg;
    }
    let revenue = match parse_revenue(&form.revenue) {
        Ok(v) => v,
        Err(msg) => {
            errors.revenue = msg;
            0
        }
    };
    (errors, revenue)
}

pub async fn create(
    store: web::Data<ProspectStore>,
    settings: web::Data<SettingsStore>,
    session: Session,
    form: web::Form<ProspectForm>,
) -> Result<HttpResponse, AppError> {
    let (errors, revenue) = validate_form(&form);

    if !errors.is_empty() {
        // Re-render with the entered values so nothing is lost on retry.
        let ctx = PageContext::build(&session, &settings, "/prospects");
        let tmpl = ProspectFormTemplate {
            ctx,
            form_action: "/prospects".to_string(),
            form_title: "New Prospect".to_string(),
            values: ProspectFormValues {
                business_name: form.business_name.clone(),
                contact_name: form.contact_name.clone(),
                contact_email: form.contact_email.clone(),
                website: form.website.clone(),
                revenue: form.revenue.clone(),
                renewal_date: form.renewal_date.clone(),
            },
            errors,
        };
        return render(tmpl);
    }

    let send_portal_link = form.action == "send";
    let prospect = store.insert(NewProspect {
        business_name: form.business_name.trim().to_string(),
        contact_name: form.contact_name.trim().to_string(),
        contact_email: form.contact_email.trim().to_string(),
        website: Some(form.website.trim().to_string()).filter(|w| !w.is_empty()),
        revenue,
        renewal_date: NaiveDate::parse_from_str(form.renewal_date.trim(), "%Y-%m-%d").ok(),
        send_portal_link,
    });

    let msg = if send_portal_link {
        format!("Prospect '{}' created and portal link sent", prospect.business_name)
    } else {
        format!("Prospect '{}' saved as draft", prospect.business_name)
    };
    set_flash(&session, &msg);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", format!("/prospects/{}", prospect.id)))
        .finish())
}
