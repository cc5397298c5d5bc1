//! View-model for the expense table.
//!
//! The table holds the latest snapshot of expense rows and derives the
//! visible page as `paginate(sort(filter(rows)))`. Derived state (sort,
//! filters, page) survives snapshot replacement, so a live-updating base
//! sequence never resets what the user configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::errors::Result;
use crate::expenses::{Expense, ExpenseServiceTrait};

use super::{ExpenseField, FilterValue, Sort, SortDirection};

pub struct ExpensesTable {
    expenses: Arc<dyn ExpenseServiceTrait>,
    rows: Vec<Expense>,
    sort: Option<Sort>,
    filters: BTreeMap<ExpenseField, FilterValue>,
    page: usize,
    page_size: usize,
}

impl ExpensesTable {
    pub fn new(expenses: Arc<dyn ExpenseServiceTrait>) -> Self {
        ExpensesTable {
            expenses,
            rows: Vec::new(),
            sort: None,
            filters: BTreeMap::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replaces the base rows wholesale with a fresh store snapshot.
    /// Sort, filters and the current page are left untouched.
    pub fn apply_snapshot(&mut self, rows: Vec<Expense>) {
        self.rows = rows;
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Cycles the sort state for `field`: inactive -> ascending ->
    /// descending -> inactive. Selecting a different field starts over at
    /// ascending.
    pub fn set_sort(&mut self, field: ExpenseField) {
        self.sort = match self.sort {
            Some(Sort { field: current, direction }) if current == field => match direction {
                SortDirection::Ascending => Some(Sort {
                    field,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Sort {
                field,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Replaces the filter predicate for `field`. The page is not reset;
    /// callers decide when to jump back to the first page.
    pub fn set_filter(&mut self, field: ExpenseField, value: FilterValue) {
        self.filters.insert(field, value);
    }

    pub fn clear_filter(&mut self, field: ExpenseField) {
        self.filters.remove(&field);
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Jumps to an arbitrary page. The index is not clamped; a page past
    /// the end simply renders empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page < last {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Number of pages for the current filtered row set. Empty results
    /// have zero pages.
    pub fn page_count(&self) -> usize {
        let filtered = self.filtered_len();
        filtered.div_ceil(self.page_size)
    }

    /// The rows of the current page: filter, then a stable sort, then
    /// pagination.
    pub fn visible_rows(&self) -> Vec<&Expense> {
        let mut rows: Vec<&Expense> = self
            .rows
            .iter()
            .filter(|row| self.matches_filters(row))
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = match sort.field {
                    ExpenseField::Description => a.description.cmp(&b.description),
                    ExpenseField::Category => a.category.cmp(&b.category),
                    ExpenseField::Date => a.date.cmp(&b.date),
                    ExpenseField::Amount => a.amount.cmp(&b.amount),
                };
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows.into_iter()
            .skip(self.page * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Deletes a row through the expense service. The base rows are not
    /// mutated locally; the row disappears when the store delivers the
    /// next snapshot.
    pub async fn delete_row(&self, id: &str) -> Result<()> {
        self.expenses.delete_expense(id).await
    }

    fn filtered_len(&self) -> usize {
        self.rows.iter().filter(|row| self.matches_filters(row)).count()
    }

    fn matches_filters(&self, row: &Expense) -> bool {
        self.filters.iter().all(|(field, value)| match value {
            FilterValue::Text(needle) => Self::cell_text(row, *field).contains(needle.as_str()),
            FilterValue::Categories(set) => set.iter().any(|c| c == &row.category),
        })
    }

    fn cell_text(row: &Expense, field: ExpenseField) -> String {
        match field {
            ExpenseField::Description => row.description.clone(),
            ExpenseField::Category => row.category.clone(),
            ExpenseField::Date => row.date.to_rfc3339(),
            ExpenseField::Amount => row.amount.to_string(),
        }
    }
}
