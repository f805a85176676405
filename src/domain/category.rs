//! Fixed category taxonomy and the display palette.

/// Categories offered for expense records.
pub const EXPENSE_CATEGORIES: [&str; 12] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Travel",
    "Education",
    "Personal Care",
    "Home & Garden",
    "Gifts & Donations",
    "Other",
];

/// Categories offered for income records.
pub const INCOME_CATEGORIES: [&str; 7] = [
    "Salary",
    "Freelance",
    "Business",
    "Investments",
    "Rental Income",
    "Gifts",
    "Other",
];

/// Label substituted when a record carries no category.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Display palette cycled over ranked rows in derived views.
pub const CATEGORY_COLORS: [&str; 12] = [
    "#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6", "#F97316", "#06B6D4", "#84CC16",
    "#EC4899", "#6B7280", "#14B8A6", "#F43F5E",
];

/// Palette color for a ranked row, cycling when rank exceeds the palette.
///
/// Color follows rank, not category identity, so re-deriving a view after
/// the ranking changes may hand a category a different color.
pub fn color_for_rank(rank: usize) -> &'static str {
    CATEGORY_COLORS[rank % CATEGORY_COLORS.len()]
}

/// Category label with the empty string collapsed to [`FALLBACK_CATEGORY`].
pub fn category_label(raw: &str) -> &str {
    if raw.is_empty() {
        FALLBACK_CATEGORY
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_past_its_length() {
        assert_eq!(color_for_rank(0), CATEGORY_COLORS[0]);
        assert_eq!(color_for_rank(CATEGORY_COLORS.len()), CATEGORY_COLORS[0]);
        assert_eq!(color_for_rank(CATEGORY_COLORS.len() + 3), CATEGORY_COLORS[3]);
    }

    #[test]
    fn empty_category_falls_back_to_other() {
        assert_eq!(category_label(""), "Other");
        assert_eq!(category_label("Travel"), "Travel");
    }
}
