pub mod delete;
pub mod detail;
pub mod form;
pub mod list;
pub mod stage;

pub use delete::delete;
pub use detail::detail;
pub use form::{create, new_form};
pub use list::list;
pub use stage::advance;
