use actix_session::Session;
use askama::Template;

use crate::flash::take_flash;
use crate::models::prospect::Prospect;
use crate::models::setting::{SettingDisplay, SettingsStore};
use crate::pipeline::view::{ProgressBarView, Size, TimelineView, Variant};
use crate::pipeline::{STAGE_ORDER, Stage};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    /// Path prefix used to mark the active nav link.
    pub active_nav: String,
}

impl PageContext {
    pub fn build(session: &Session, settings: &SettingsStore, current_path: &str) -> Self {
        PageContext {
            app_name: settings.get_value("app.name", "Bindline"),
            flash: take_flash(session),
            active_nav: current_path.to_string(),
        }
    }
}

/// One prospect row for list-style pages, with its compact progress bar
/// prebuilt.
pub struct ProspectRow {
    pub id: i64,
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub stage_label: &'static str,
    pub revenue_label: String,
    pub renewal_label: String,
    pub detail_href: String,
    pub bar: ProgressBarView,
}

impl ProspectRow {
    pub fn build(p: &Prospect, variant: Variant, show_labels: bool) -> Self {
        ProspectRow {
            id: p.id,
            business_name: p.business_name.clone(),
            contact_name: p.contact_name.clone(),
            contact_email: p.contact_email.clone(),
            stage_label: p.stage_label(),
            revenue_label: format_usd(p.revenue),
            renewal_label: p
                .renewal_date
                .map(|d| d.format("%b %d, %Y").to_string())
                .unwrap_or_else(|| "—".to_string()),
            detail_href: format!("/prospects/{}", p.id),
            bar: ProgressBarView::build(p.id, p.current_stage(), None, variant, Size::Sm, show_labels),
        }
    }
}

/// Formatted detail-page fields for one prospect.
pub struct ProspectDetail {
    pub id: i64,
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: Option<String>,
    pub stage_label: &'static str,
    pub revenue_label: String,
    pub renewal_label: String,
    pub created_label: String,
    pub updated_label: String,
    pub portal_sent: bool,
}

impl ProspectDetail {
    pub fn build(p: &Prospect) -> Self {
        ProspectDetail {
            id: p.id,
            business_name: p.business_name.clone(),
            contact_name: p.contact_name.clone(),
            contact_email: p.contact_email.clone(),
            website: p.website.clone(),
            stage_label: p.stage_label(),
            revenue_label: format_usd(p.revenue),
            renewal_label: p
                .renewal_date
                .map(|d| d.format("%b %d, %Y").to_string())
                .unwrap_or_else(|| "—".to_string()),
            created_label: p.created_at.format("%b %d, %Y").to_string(),
            updated_label: p.updated_at.format("%b %d, %Y").to_string(),
            portal_sent: p.portal_token.is_some(),
        }
    }
}

/// Whole-dollar amount with thousands separators: 840000 -> "$840,000".
pub fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// One card on the dashboard: a stage plus its prospect count.
pub struct StageCard {
    pub label: &'static str,
    pub icon: &'static str,
    pub count: usize,
    pub filter_href: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub stage_cards: Vec<StageCard>,
    pub total_count: usize,
    pub recent: Vec<ProspectRow>,
}

/// One option in the list page's stage filter.
pub struct StageOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Build the stage filter options with `selected` marking the active one.
pub fn stage_options(selected: Option<Stage>) -> Vec<StageOption> {
    STAGE_ORDER
        .iter()
        .map(|&s| StageOption {
            id: s.id(),
            label: s.label(),
            selected: selected == Some(s),
        })
        .collect()
}

#[derive(Template)]
#[template(path = "prospects/list.html")]
pub struct ProspectListTemplate {
    pub ctx: PageContext,
    pub rows: Vec<ProspectRow>,
    pub total_count: usize,
    pub search_query: String,
    pub stage_options: Vec<StageOption>,
}

#[derive(Template)]
#[template(path = "prospects/detail.html")]
pub struct ProspectDetailTemplate {
    pub ctx: PageContext,
    pub prospect: ProspectDetail,
    pub bar: ProgressBarView,
    pub timeline: TimelineView,
}

/// Per-field validation messages for the intake form; empty string means no
/// error on that field.
#[derive(Default)]
pub struct ProspectFormErrors {
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: String,
    pub revenue: String,
}

impl ProspectFormErrors {
    pub fn is_empty(&self) -> bool {
        self.business_name.is_empty()
            && self.contact_name.is_empty()
            && self.contact_email.is_empty()
            && self.website.is_empty()
            && self.revenue.is_empty()
    }
}

/// Raw form values echoed back when re-rendering after validation errors.
#[derive(Default)]
pub struct ProspectFormValues {
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: String,
    pub revenue: String,
    pub renewal_date: String,
}

#[derive(Template)]
#[template(path = "prospects/form.html")]
pub struct ProspectFormTemplate {
    pub ctx: PageContext,
    pub form_action: String,
    pub form_title: String,
    pub values: ProspectFormValues,
    pub errors: ProspectFormErrors,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub ctx: PageContext,
    pub settings: Vec<SettingDisplay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting() {
        assert_eq!(format_usd(0), "$0");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(840_000), "$840,000");
        assert_eq!(format_usd(5_100_000), "$5,100,000");
        assert_eq!(format_usd(-1_234), "-$1,234");
    }

    #[test]
    fn stage_options_mark_selection() {
        let opts = stage_options(Some(Stage::Quotes));
        assert_eq!(opts.len(), 5);
        assert!(opts[3].selected);
        assert_eq!(opts.iter().filter(|o| o.selected).count(), 1);
        let none = stage_options(None);
        assert!(none.iter().all(|o| !o.selected));
    }
}
