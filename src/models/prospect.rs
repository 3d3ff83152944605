use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::pipeline::{STAGE_ORDER, Stage};

/// An insurance prospect as supplied by the data source. The pipeline core
/// reads `status` (and id/name for links) and never mutates records.
#[derive(Debug, Clone)]
pub struct Prospect {
    pub id: i64,
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: Option<String>,
    /// Raw stage id. Kept as a string because the data source owns the
    /// field; values outside the canonical order must degrade, not fail.
    pub status: String,
    /// Annual revenue in whole dollars.
    pub revenue: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub renewal_date: Option<NaiveDate>,
    /// Set once a portal link has been sent to the prospect.
    pub portal_token: Option<String>,
    /// Stage completion log feeding the timeline's date stamps.
    pub history: Vec<(Stage, NaiveDate)>,
}

impl Prospect {
    /// The prospect's current stage, `None` when the status field is not a
    /// canonical stage id.
    pub fn current_stage(&self) -> Option<Stage> {
        Stage::parse(&self.status)
    }

    pub fn stage_label(&self) -> &'static str {
        self.current_stage().map(Stage::label).unwrap_or("Unknown")
    }
}

/// Input for creating a prospect from the intake form.
#[derive(Debug, Clone)]
pub struct NewProspect {
    pub business_name: String,
    pub contact_name: String,
    pub contact_email: String,
    pub website: Option<String>,
    pub revenue: i64,
    pub renewal_date: Option<NaiveDate>,
    /// When true a portal token is generated and attached.
    pub send_portal_link: bool,
}

/// In-memory prospect source, seeded at startup. Stands in for the external
/// data source that owns prospect records.
pub struct ProspectStore {
    next_id: AtomicI64,
    inner: RwLock<Vec<Prospect>>,
}

/// Recover the guard from a poisoned lock; the store holds plain data, a
/// panicking reader leaves nothing half-written worth refusing over.
macro_rules! read_guard {
    ($lock:expr) => {
        $lock.read().unwrap_or_else(|e| e.into_inner())
    };
}
macro_rules! write_guard {
    ($lock:expr) => {
        $lock.write().unwrap_or_else(|e| e.into_inner())
    };
}

impl ProspectStore {
    pub fn new() -> Self {
        ProspectStore {
            next_id: AtomicI64::new(1),
            inner: RwLock::new(Vec::new()),
        }
    }

    /// List prospects, newest first, optionally filtered by a search term
    /// (business or contact name, case-insensitive) and/or a stage.
    pub fn list(&self, search: Option<&str>, stage: Option<Stage>) -> Vec<Prospect> {
        let guard = read_guard!(self.inner);
        let needle = search.map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase);
        let mut out: Vec<Prospect> = guard
            .iter()
            .filter(|p| match &needle {
                Some(q) => {
                    p.business_name.to_lowercase().contains(q)
                        || p.contact_name.to_lowercase().contains(q)
                }
                None => true,
            })
            .filter(|p| match stage {
                Some(s) => p.current_stage() == Some(s),
                None => true,
            })
            .cloned()
            .collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        out
    }

    pub fn find(&self, id: i64) -> Option<Prospect> {
        read_guard!(self.inner).iter().find(|p| p.id == id).cloned()
    }

    /// Insert a new prospect at the first pipeline stage. Returns the stored
    /// record.
    pub fn insert(&self, new: NewProspect) -> Prospect {
        let now = Utc::now();
        let prospect = Prospect {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            business_name: new.business_name,
            contact_name: new.contact_name,
            contact_email: new.contact_email,
            website: new.website,
            status: Stage::Docs.id().to_string(),
            revenue: new.revenue,
            created_at: now,
            updated_at: now,
            renewal_date: new.renewal_date,
            portal_token: new.send_portal_link.then(generate_portal_token),
            history: Vec::new(),
        };
        write_guard!(self.inner).push(prospect.clone());
        prospect
    }

    pub fn delete(&self, id: i64) -> bool {
        let mut guard = write_guard!(self.inner);
        let before = guard.len();
        guard.retain(|p| p.id != id);
        guard.len() < before
    }

    /// Advance a prospect to `stage`, stamping today into its history.
    /// Returns false when the id is unknown.
    pub fn set_stage(&self, id: i64, stage: Stage) -> bool {
        let mut guard = write_guard!(self.inner);
        let Some(p) = guard.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        if let Some(previous) = Stage::parse(&p.status) {
            if previous.position() < stage.position()
                && !p.history.iter().any(|(s, _)| *s == previous)
            {
                p.history.push((previous, Utc::now().date_naive()));
            }
        }
        p.status = stage.id().to_string();
        p.updated_at = Utc::now();
        true
    }

    /// Prospect count per canonical stage, in canonical order.
    pub fn stage_counts(&self) -> Vec<(Stage, usize)> {
        let guard = read_guard!(self.inner);
        STAGE_ORDER
            .iter()
            .map(|&stage| {
                let n = guard.iter().filter(|p| p.current_stage() == Some(stage)).count();
                (stage, n)
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        read_guard!(self.inner).len()
    }

    /// Seed a handful of demo prospects spread across the pipeline.
    pub fn seed_demo(&self) {
        if self.count() > 0 {
            return;
        }
        let demo: [(&str, &str, &str, &str, Stage, i64); 5] = [
            (
                "Hartley & Sons Plumbing",
                "Ray Hartley",
                "ray@hartleyplumbing.com",
                "https://hartleyplumbing.com",
                Stage::Docs,
                840_000,
            ),
            (
                "Bluebird Cafe",
                "Dana Ortiz",
                "dana@bluebirdcafe.com",
                "https://bluebirdcafe.com",
                Stage::Form,
                420_000,
            ),
            (
                "Kestrel Tech Consulting",
                "Priya Nair",
                "priya@kestreltech.io",
                "https://kestreltech.io",
                Stage::Submitted,
                1_600_000,
            ),
            (
                "Lakeside Dental Group",
                "Tom Weiss",
                "tom@lakesidedental.com",
                "https://lakesidedental.com",
                Stage::Quotes,
                2_300_000,
            ),
            (
                "Moreno Construction LLC",
                "Luis Moreno",
                "luis@morenoconstruction.com",
                "https://morenoconstruction.com",
                Stage::Bound,
                5_100_000,
            ),
        ];
        for (business, contact, email, site, stage, revenue) in demo {
            let p = self.insert(NewProspect {
                business_name: business.to_string(),
                contact_name: contact.to_string(),
                contact_email: email.to_string(),
                website: Some(site.to_string()),
                revenue,
                renewal_date: NaiveDate::from_ymd_opt(2026, 11, 1),
                send_portal_link: false,
            });
            // Walk the record forward so each earlier stage gets a history
            // stamp.
            for &s in &STAGE_ORDER[1..=stage.position()] {
                self.set_stage(p.id, s);
            }
        }
        log::info!("Seeded {} demo prospects", self.count());
    }
}

impl Default for ProspectStore {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_portal_token() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(name: &str, send_link: bool) -> NewProspect {
        NewProspect {
            business_name: name.to_string(),
            contact_name: "Pat Doe".to_string(),
            contact_email: "pat@example.com".to_string(),
            website: None,
            revenue: 100_000,
            renewal_date: None,
            send_portal_link: send_link,
        }
    }

    #[test]
    fn insert_starts_at_docs() {
        let store = ProspectStore::new();
        let p = store.insert(sample("Acme", false));
        assert_eq!(p.status, "docs");
        assert_eq!(p.current_stage(), Some(Stage::Docs));
        assert!(p.portal_token.is_none());
        assert!(p.history.is_empty());
    }

    #[test]
    fn portal_link_gets_a_token() {
        let store = ProspectStore::new();
        let p = store.insert(sample("Acme", true));
        let token = p.portal_token.expect("token expected");
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn set_stage_records_history() {
        let store = ProspectStore::new();
        let p = store.insert(sample("Acme", false));
        assert!(store.set_stage(p.id, Stage::Submitted));
        let p = store.find(p.id).unwrap();
        assert_eq!(p.current_stage(), Some(Stage::Submitted));
        assert_eq!(p.history.len(), 1);
        assert_eq!(p.history[0].0, Stage::Docs);
        assert!(!store.set_stage(999, Stage::Bound));
    }

    #[test]
    fn unknown_status_degrades_to_none() {
        let store = ProspectStore::new();
        let p = store.insert(sample("Acme", false));
        // Simulate a record whose owner wrote an out-of-order status.
        {
            let mut guard = store.inner.write().unwrap();
            guard.iter_mut().find(|x| x.id == p.id).unwrap().status = "renewal".to_string();
        }
        let p = store.find(p.id).unwrap();
        assert_eq!(p.current_stage(), None);
        assert_eq!(p.stage_label(), "Unknown");
        // It still lists, but matches no stage filter.
        assert_eq!(store.list(None, None).len(), 1);
        assert!(store.list(None, Some(Stage::Docs)).is_empty());
    }

    #[test]
    fn list_filters_by_search_and_stage() {
        let store = ProspectStore::new();
        store.insert(sample("Acme Widgets", false));
        let b = store.insert(sample("Bolt Supply", false));
        store.set_stage(b.id, Stage::Quotes);

        assert_eq!(store.list(Some("acme"), None).len(), 1);
        assert_eq!(store.list(Some("  "), None).len(), 2);
        assert_eq!(store.list(None, Some(Stage::Quotes)).len(), 1);
        assert!(store.list(Some("acme"), Some(Stage::Quotes)).is_empty());
    }

    #[test]
    fn stage_counts_cover_canonical_order() {
        let store = ProspectStore::new();
        store.seed_demo();
        let counts = store.stage_counts();
        assert_eq!(counts.len(), 5);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 5);
        for (stage, n) in counts {
            assert_eq!(n, 1, "stage {}", stage.id());
        }
    }
}
