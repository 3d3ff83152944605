use serde::{Deserialize, Serialize};

/// One step in the fixed five-step prospect pipeline.
///
/// The set and order are fixed at compile time; stages are never added or
/// removed at runtime. String ids (`docs`, `form`, ...) appear in URLs and
/// in the `status` field of prospect records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Docs,
    Form,
    Submitted,
    Quotes,
    Bound,
}

/// Canonical pipeline order. All position comparisons go through this.
pub const STAGE_ORDER: [Stage; 5] = [
    Stage::Docs,
    Stage::Form,
    Stage::Submitted,
    Stage::Quotes,
    Stage::Bound,
];

/// Static per-stage metadata shown on the timeline and in tooltips.
pub struct StageInfo {
    pub description: &'static str,
    pub success_criteria: &'static str,
    pub key_actions: &'static str,
    pub estimated_duration: &'static str,
}

impl Stage {
    /// Parse a stage id. Unknown ids yield `None`; callers treat that as
    /// the degenerate "not in canonical order" case, never an error.
    pub fn parse(id: &str) -> Option<Stage> {
        match id {
            "docs" => Some(Stage::Docs),
            "form" => Some(Stage::Form),
            "submitted" => Some(Stage::Submitted),
            "quotes" => Some(Stage::Quotes),
            "bound" => Some(Stage::Bound),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Stage::Docs => "docs",
            Stage::Form => "form",
            Stage::Submitted => "submitted",
            Stage::Quotes => "quotes",
            Stage::Bound => "bound",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Docs => "Documents",
            Stage::Form => "Application Form",
            Stage::Submitted => "Submission",
            Stage::Quotes => "Quotes",
            Stage::Bound => "Bound",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Stage::Docs => "Docs",
            Stage::Form => "Form",
            Stage::Submitted => "Submitted",
            Stage::Quotes => "Quotes",
            Stage::Bound => "Bound",
        }
    }

    /// Icon name resolved by the stylesheet (one glyph per stage).
    pub fn icon(self) -> &'static str {
        match self {
            Stage::Docs => "file-text",
            Stage::Form => "clipboard",
            Stage::Submitted => "send",
            Stage::Quotes => "tag",
            Stage::Bound => "shield-check",
        }
    }

    /// 0-based index in [`STAGE_ORDER`].
    pub fn position(self) -> usize {
        match self {
            Stage::Docs => 0,
            Stage::Form => 1,
            Stage::Submitted => 2,
            Stage::Quotes => 3,
            Stage::Bound => 4,
        }
    }

    pub fn info(self) -> &'static StageInfo {
        match self {
            Stage::Docs => &StageInfo {
                description: "Collect the documents needed to start the application",
                success_criteria: "All required documents received and reviewed",
                key_actions: "Request loss runs, financials, and current policy declarations",
                estimated_duration: "1-3 days",
            },
            Stage::Form => &StageInfo {
                description: "Complete the application form with business details",
                success_criteria: "Application form complete and signed off by the owner",
                key_actions: "Fill in business details, verify contact info, confirm coverage needs",
                estimated_duration: "2-5 days",
            },
            Stage::Submitted => &StageInfo {
                description: "Submit the completed application to carriers",
                success_criteria: "Submission acknowledged by every target carrier",
                key_actions: "Package the submission, pick carriers, send and confirm receipt",
                estimated_duration: "1-2 days",
            },
            Stage::Quotes => &StageInfo {
                description: "Collect and compare carrier quotes",
                success_criteria: "At least one competitive quote presented to the prospect",
                key_actions: "Chase carriers, compare terms, prepare the proposal",
                estimated_duration: "5-10 days",
            },
            Stage::Bound => &StageInfo {
                description: "Bind coverage and issue policy documents",
                success_criteria: "Coverage bound and binder delivered",
                key_actions: "Confirm the selected quote, collect payment, request the binder",
                estimated_duration: "1-2 days",
            },
        }
    }
}
