pub mod prospect;
pub mod setting;
