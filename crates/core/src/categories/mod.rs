//! Categories module - fixed defaults plus user-defined names.

mod categories_constants;
mod categories_model;
mod categories_service;
mod categories_traits;


pub use categories_constants::{category_icon, DEFAULT_CATEGORIES};
pub use categories_model::{all_categories, NewUserCategory, UserCategory};
pub use categories_service::CategoryService;
pub use categories_traits::{CategoriesCallback, CategoryServiceTrait};
