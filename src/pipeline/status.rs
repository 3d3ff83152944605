use serde::{Deserialize, Serialize};

use super::stage::{STAGE_ORDER, Stage};

/// Derived completion state of a stage relative to a prospect's current stage.
///
/// Never stored, always recomputed from the canonical order so that every
/// view colors stages the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

impl StageStatus {
    /// Stylesheet modifier class for a node in this state.
    pub fn css_class(self) -> &'static str {
        match self {
            StageStatus::Completed => "is-completed",
            StageStatus::Current => "is-current",
            StageStatus::Pending => "is-pending",
        }
    }
}

/// Resolve the status of `stage` against the prospect's current stage.
///
/// `current = None` models a prospect whose status field is not one of the
/// canonical stage ids (index -1 in position terms): every stage resolves
/// `Pending` and nothing is `Current`. Accepted degenerate behavior, not an
/// error.
pub fn resolve_status(stage: Stage, current: Option<Stage>) -> StageStatus {
    match current {
        Some(current) => {
            if stage.position() < current.position() {
                StageStatus::Completed
            } else if stage.position() == current.position() {
                StageStatus::Current
            } else {
                StageStatus::Pending
            }
        }
        None => StageStatus::Pending,
    }
}

/// Number of completed stages, which equals the current stage's 0-based
/// position in the canonical order.
pub fn completed_count(current: Option<Stage>) -> usize {
    current.map(|s| s.position()).unwrap_or(0)
}

/// Display-only progress statistic for the compact indicator: the current
/// stage counts as half-complete.
pub fn progress_percent(current: Option<Stage>) -> f64 {
    let completed = completed_count(current) as f64;
    let half = if current.is_some() { 0.5 } else { 0.0 };
    (completed + half) / STAGE_ORDER.len() as f64 * 100.0
}
