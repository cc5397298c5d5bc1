//! Tests for spending aggregations.

#[cfg(test)]
mod tests {
    use crate::expenses::Expense;
    use crate::spending::{monthly_totals, spending_by_category};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn expense(id: &str, category: &str, amount: Decimal) -> Expense {
        Expense {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            description: "test expense".to_string(),
            amount,
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap(),
        }
    }

    // ==================== monthly_totals ====================

    #[test]
    fn test_monthly_totals_sums_and_subtracts() {
        let expenses = vec![
            expense("e1", "Food", dec!(75.50)),
            expense("e2", "Transport", dec!(120.00)),
            expense("e3", "Shopping", dec!(89.99)),
        ];
        let totals = monthly_totals(&expenses, dec!(1000));
        assert_eq!(totals.total_expenses, dec!(285.49));
        assert_eq!(totals.total_income, dec!(1000));
        assert_eq!(totals.net_savings, dec!(714.51));
    }

    #[test]
    fn test_monthly_totals_empty_expenses_savings_equal_income() {
        let totals = monthly_totals(&[], dec!(2500));
        assert_eq!(totals.total_expenses, Decimal::ZERO);
        assert_eq!(totals.net_savings, dec!(2500));
    }

    #[test]
    fn test_monthly_totals_can_go_negative() {
        let expenses = vec![expense("e1", "Food", dec!(300))];
        let totals = monthly_totals(&expenses, dec!(100));
        assert_eq!(totals.net_savings, dec!(-200));
    }

    // ==================== spending_by_category ====================

    #[test]
    fn test_spending_by_category_rolls_up_in_first_seen_order() {
        let expenses = vec![
            expense("e1", "Food", dec!(75.50)),
            expense("e2", "Transport", dec!(120.00)),
            expense("e3", "Food", dec!(24.50)),
        ];
        let rollup = spending_by_category(&expenses);
        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].category, "Food");
        assert_eq!(rollup[0].amount, dec!(100.00));
        assert_eq!(rollup[1].category, "Transport");
        assert_eq!(rollup[1].amount, dec!(120.00));
    }

    #[test]
    fn test_spending_by_category_rounds_to_display_precision() {
        let expenses = vec![
            expense("e1", "Food", dec!(10.005)),
            expense("e2", "Food", dec!(10.002)),
        ];
        let rollup = spending_by_category(&expenses);
        assert_eq!(rollup[0].amount, dec!(20.01));
    }

    #[test]
    fn test_spending_by_category_empty() {
        assert!(spending_by_category(&[]).is_empty());
    }
}
