pub mod dashboard;
pub mod extraction_handlers;
pub mod prospect_handlers;
pub mod settings_handlers;
