//! Table module - reactive sort/filter/pagination over a live expense list.

mod table_model;
mod table_view_model;


pub use table_model::{ExpenseField, FilterValue, Sort, SortDirection};
pub use table_view_model::ExpensesTable;
