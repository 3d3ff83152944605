pub mod errors;
pub mod extraction;
pub mod flash;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod templates_structs;
pub mod validate;
