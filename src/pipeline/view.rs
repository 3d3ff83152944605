//! View models for the two stage visualizations.
//!
//! All status coloring, css classes, and hrefs are computed here from the
//! canonical resolver; templates only interpolate, they never re-derive
//! status on their own.

use chrono::NaiveDate;

use super::stage::{STAGE_ORDER, Stage, StageInfo};
use super::status::{StageStatus, progress_percent, resolve_status};

/// Display variant of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Horizontal,
    Compact,
    Interactive,
}

impl Variant {
    pub fn parse(id: &str) -> Option<Variant> {
        match id {
            "horizontal" => Some(Variant::Horizontal),
            "compact" => Some(Variant::Compact),
            "interactive" => Some(Variant::Interactive),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Variant::Horizontal => "horizontal",
            Variant::Compact => "compact",
            Variant::Interactive => "interactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Sm,
    Md,
    Lg,
}

impl Size {
    pub fn css_class(self) -> &'static str {
        match self {
            Size::Sm => "stage-node-sm",
            Size::Md => "stage-node-md",
            Size::Lg => "stage-node-lg",
        }
    }
}

/// One clickable node in the progress bar.
pub struct StageNode {
    pub stage: Stage,
    pub status: StageStatus,
    pub is_active_viewing: bool,
    /// Full class attribute: size + status + optional viewing emphasis.
    pub classes: String,
    /// Classes for the connector drawn before this node; empty on the first
    /// node. Filled once the preceding stage is completed.
    pub connector_before: &'static str,
    pub href: String,
    pub tooltip: &'static str,
}

pub struct ProgressBarView {
    pub variant: Variant,
    pub size: Size,
    pub show_labels: bool,
    pub nodes: Vec<StageNode>,
    pub percent: f64,
    pub percent_label: String,
}

/// Detail-page link for a stage node, carrying the stage as a highlight
/// query parameter.
pub fn stage_href(prospect_id: i64, stage: Stage) -> String {
    format!("/prospects/{}?stage={}&highlight=true", prospect_id, stage.id())
}

fn node_classes(size: Size, status: StageStatus, viewing: bool) -> String {
    let mut classes = format!("stage-node {} {}", size.css_class(), status.css_class());
    if viewing {
        classes.push_str(" is-viewing");
    }
    classes
}

impl ProgressBarView {
    pub fn build(
        prospect_id: i64,
        current: Option<Stage>,
        active_viewing: Option<Stage>,
        variant: Variant,
        size: Size,
        show_labels: bool,
    ) -> Self {
        let nodes: Vec<StageNode> = STAGE_ORDER
            .iter()
            .enumerate()
            .map(|(i, &stage)| {
                let status = resolve_status(stage, current);
                let viewing = active_viewing == Some(stage);
                // The connector before a node is colored by the stage that
                // precedes it in the canonical order.
                let connector_before = if i == 0 {
                    ""
                } else if resolve_status(STAGE_ORDER[i - 1], current) == StageStatus::Completed {
                    "stage-connector is-filled"
                } else {
                    "stage-connector is-empty"
                };
                StageNode {
                    stage,
                    status,
                    is_active_viewing: viewing,
                    classes: node_classes(size, status, viewing),
                    connector_before,
                    href: stage_href(prospect_id, stage),
                    tooltip: stage.info().description,
                }
            })
            .collect();

        let percent = progress_percent(current);
        ProgressBarView {
            variant,
            size,
            show_labels,
            nodes,
            percent,
            percent_label: format!("{}%", percent.round() as i64),
        }
    }

    /// Interactive nodes are intercepted client-side; the anchor href stays
    /// in place as the fallback for the other variants.
    pub fn is_interactive(&self) -> bool {
        self.variant == Variant::Interactive
    }

    pub fn is_compact(&self) -> bool {
        self.variant == Variant::Compact
    }
}

/// One annotated row of the timeline.
pub struct TimelineEntry {
    pub stage: Stage,
    pub status: StageStatus,
    pub is_active_viewing: bool,
    pub classes: String,
    pub info: &'static StageInfo,
    /// Set only for completed stages with a recorded history event.
    pub completed_on: Option<NaiveDate>,
    /// Formatted date stamp; empty when there is nothing to show.
    pub completed_label: String,
    pub href: String,
}

pub struct TimelineView {
    pub entries: Vec<TimelineEntry>,
    /// Static hover hint, identical for every stage.
    pub hint: &'static str,
}

impl TimelineView {
    pub fn build(
        prospect_id: i64,
        current: Option<Stage>,
        active_viewing: Option<Stage>,
        history: &[(Stage, NaiveDate)],
    ) -> Self {
        let entries = STAGE_ORDER
            .iter()
            .map(|&stage| {
                let status = resolve_status(stage, current);
                let viewing = active_viewing == Some(stage);
                // A date stamp is only ever attached to a completed stage,
                // whatever the history log claims.
                let completed_on = if status == StageStatus::Completed {
                    history.iter().find(|(s, _)| *s == stage).map(|(_, d)| *d)
                } else {
                    None
                };
                let completed_label = completed_on
                    .map(|d| format!("Completed {}", d.format("%b %d, %Y")))
                    .unwrap_or_default();
                let mut classes = format!("timeline-stage {}", status.css_class());
                if viewing {
                    classes.push_str(" is-viewing");
                }
                TimelineEntry {
                    stage,
                    status,
                    is_active_viewing: viewing,
                    classes,
                    info: stage.info(),
                    completed_on,
                    completed_label,
                    href: stage_href(prospect_id, stage),
                }
            })
            .collect();
        TimelineView {
            entries,
            hint: "Click for stage details",
        }
    }
}
