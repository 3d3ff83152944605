use std::time::Duration;

use async_trait::async_trait;

use super::{AdditionalContacts, BusinessExtractor, ExtractError, ExtractionResult, SocialMedia};
use crate::validate::host_of;

/// Substring rules applied to the lowercased URL, first match wins.
const CATEGORY_RULES: &[(&str, &str, &str)] = &[
    ("tech", "Technology Services", "541511"),
    ("software", "Technology Services", "541511"),
    ("restaurant", "Restaurants", "722511"),
    ("cafe", "Restaurants", "722511"),
    ("food", "Restaurants", "722511"),
    ("retail", "Retail Stores", "455219"),
    ("shop", "Retail Stores", "455219"),
    ("construction", "Construction Services", "236220"),
    ("build", "Construction Services", "236220"),
    ("medical", "Medical Offices", "621111"),
    ("health", "Medical Offices", "621111"),
    ("dental", "Medical Offices", "621111"),
    ("law", "Legal Services", "541110"),
    ("legal", "Legal Services", "541110"),
];

const DEFAULT_CATEGORY: (&str, &str) = ("Professional Services", "541990");

/// Deterministic mock of the extraction service: one bounded sleep, then
/// substring matching on the URL. No network, no real analysis.
pub struct MockExtractor {
    delay: Duration,
}

impl MockExtractor {
    pub fn new(delay: Duration) -> Self {
        MockExtractor { delay }
    }
}

fn categorize(url: &str) -> (&'static str, &'static str) {
    let lowered = url.to_lowercase();
    for (needle, category, naics) in CATEGORY_RULES {
        if lowered.contains(needle) {
            return (category, naics);
        }
    }
    DEFAULT_CATEGORY
}

/// Title-case the first host label: "hartley-plumbing.com" -> "Hartley Plumbing".
fn business_name_from_host(host: &str) -> String {
    let label = host
        .strip_prefix("www.")
        .unwrap_or(host)
        .split('.')
        .next()
        .unwrap_or(host);
    label
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl BusinessExtractor for MockExtractor {
    async fn extract(&self, website: &str) -> Result<ExtractionResult, ExtractError> {
        // Bounded processing delay; the real service is network-bound.
        tokio::time::sleep(self.delay).await;

        let host = host_of(website).ok_or(ExtractError::InvalidUrl)?;
        let handle = host
            .strip_prefix("www.")
            .unwrap_or(host)
            .split('.')
            .next()
            .unwrap_or(host)
            .to_string();
        let name = business_name_from_host(host);
        let (category, naics) = categorize(website);

        Ok(ExtractionResult {
            business_name: name.clone(),
            business_address: "123 Main Street".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            zip_code: "62704".to_string(),
            business_category: category.to_string(),
            naics_code: naics.to_string(),
            business_description: format!(
                "{name} is a locally owned business in the {category} sector."
            ),
            operating_hours: "Mon-Fri 9:00 AM - 5:00 PM".to_string(),
            social_media: SocialMedia {
                facebook: Some(format!("https://facebook.com/{handle}")),
                instagram: None,
                twitter: None,
                linkedin: Some(format!("https://linkedin.com/company/{handle}")),
                youtube: None,
            },
            additional_contacts: AdditionalContacts {
                phone: Some("(555) 012-3456".to_string()),
                email: Some(format!("info@{host}")),
            },
            estimated_employees: "5-25".to_string(),
            founded_year: Some(2012),
        })
    }
}
