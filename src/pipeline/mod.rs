pub mod stage;
pub mod status;
pub mod view;

pub use stage::{STAGE_ORDER, Stage, StageInfo};
pub use status::{StageStatus, completed_count, progress_percent, resolve_status};
