/// Fixed default category names, in display order.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food",
    "Transport",
    "Shopping",
    "Utilities",
    "Entertainment",
    "Health",
    "Other",
];

/// Icon name shown next to a default category. User-defined categories
/// fall back to the "Other" icon.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Food" => "Utensils",
        "Transport" => "Car",
        "Shopping" => "ShoppingBag",
        "Utilities" => "Lightbulb",
        "Entertainment" => "Ticket",
        "Health" => "HeartPulse",
        _ => "Sprout",
    }
}
