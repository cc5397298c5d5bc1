/// Store collection holding expense documents.
pub const EXPENSES_COLLECTION: &str = "expenses";

/// Store collection holding budget documents.
pub const BUDGETS_COLLECTION: &str = "budgets";

/// Store collection holding user-defined category documents.
pub const USER_CATEGORIES_COLLECTION: &str = "userCategories";

/// Store collection holding per-user profile documents (keyed by uid).
pub const USER_PROFILES_COLLECTION: &str = "userProfiles";

/// Default number of rows per expense-table page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How many expenses the "recent expenses" dashboard query returns.
pub const RECENT_EXPENSES_LIMIT: usize = 5;

/// Decimal precision for display amounts.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
