//! Tests for budget aggregation and upsert resolution.

#[cfg(test)]
mod tests {
    use crate::budgets::{
        attach_spending, resolve_upsert, Budget, BudgetService, BudgetServiceTrait, NewBudget,
        UpsertAction,
    };
    use crate::constants::BUDGETS_COLLECTION;
    use crate::errors::Error;
    use crate::expenses::Expense;
    use crate::store::{MockOperation, MockStore};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::sync::Arc;

    fn budget(id: &str, category: &str, amount: Decimal) -> Budget {
        Budget {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            category: category.to_string(),
            amount,
        }
    }

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

    // ==================== attach_spending ====================

    #[test]
    fn test_attach_spending_food_scenario() {
        let budgets = vec![budget("b1", "Food", dec!(500))];
        let expenses = vec![
            expense("e1", "Food", dec!(75.5)),
            expense("e2", "Transport", dec!(10)),
        ];

        let views = attach_spending(&budgets, &expenses);
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].spent, dec!(75.5));
        assert_eq!(views[0].remaining, dec!(424.5));
        assert_eq!(views[0].progress_percent, 15.1);
        assert!(!views[0].is_over_budget);
    }

    #[test]
    fn test_attach_spending_matches_category_exactly() {
        // No trimming, no case normalization.
        let budgets = vec![budget("b1", "Food", dec!(100))];
        let expenses = vec![
            expense("e1", "food", dec!(40)),
            expense("e2", "Food ", dec!(40)),
            expense("e3", "Food", dec!(40)),
        ];

        let views = attach_spending(&budgets, &expenses);
        assert_eq!(views[0].spent, dec!(40));
    }

    #[test]
    fn test_attach_spending_over_budget() {
        let budgets = vec![budget("b1", "Food", dec!(50))];
        let expenses = vec![expense("e1", "Food", dec!(75))];

        let views = attach_spending(&budgets, &expenses);
        assert_eq!(views[0].remaining, dec!(-25));
        assert_eq!(views[0].progress_percent, 150.0);
        assert!(views[0].is_over_budget);
    }

    #[test]
    fn test_attach_spending_zero_amount_budget_is_guarded() {
        // A zero budget must report 0% rather than divide by zero.
        let budgets = vec![budget("b1", "Food", dec!(0))];
        let expenses = vec![expense("e1", "Food", dec!(10))];

        let views = attach_spending(&budgets, &expenses);
        assert_eq!(views[0].progress_percent, 0.0);
        assert!(views[0].is_over_budget);
    }

    #[test]
    fn test_attach_spending_no_matching_expenses() {
        let budgets = vec![budget("b1", "Health", dec!(200))];
        let views = attach_spending(&budgets, &[]);
        assert_eq!(views[0].spent, Decimal::ZERO);
        assert_eq!(views[0].remaining, dec!(200));
        assert_eq!(views[0].progress_percent, 0.0);
    }

    #[test]
    fn test_attach_spending_preserves_budget_order() {
        let budgets = vec![
            budget("b1", "Transport", dec!(200)),
            budget("b2", "Food", dec!(500)),
        ];
        let views = attach_spending(&budgets, &[]);
        let categories: Vec<&str> = views.iter().map(|v| v.category.as_str()).collect();
        assert_eq!(categories, vec!["Transport", "Food"]);
    }

    // ==================== resolve_upsert ====================

    #[test]
    fn test_resolve_upsert_new_category_inserts() {
        let new_budget = NewBudget {
            category: "Health".to_string(),
            amount: dec!(150),
        };
        let action = resolve_upsert(&[], &new_budget);
        assert_eq!(action, UpsertAction::Insert(new_budget));
    }

    #[test]
    fn test_resolve_upsert_existing_category_updates() {
        let existing = vec![budget("b1", "Food", dec!(500))];
        let new_budget = NewBudget {
            category: "Food".to_string(),
            amount: dec!(600),
        };
        let action = resolve_upsert(&existing, &new_budget);
        assert_eq!(
            action,
            UpsertAction::Update {
                id: "b1".to_string(),
                amount: dec!(600),
            }
        );
    }

    #[test]
    fn test_resolve_upsert_twice_never_duplicates_category() {
        let new_budget = NewBudget {
            category: "Food".to_string(),
            amount: dec!(500),
        };
        let mut budgets: Vec<Budget> = Vec::new();

        match resolve_upsert(&budgets, &new_budget) {
            UpsertAction::Insert(b) => budgets.push(budget("b1", &b.category, b.amount)),
            UpsertAction::Update { .. } => panic!("First submission must insert"),
        }

        let resubmission = NewBudget {
            category: "Food".to_string(),
            amount: dec!(750),
        };
        match resolve_upsert(&budgets, &resubmission) {
            UpsertAction::Update { id, amount } => {
                let target = budgets.iter_mut().find(|b| b.id == id).unwrap();
                target.amount = amount;
            }
            UpsertAction::Insert(_) => panic!("Resubmission must update"),
        }

        let food_budgets: Vec<&Budget> =
            budgets.iter().filter(|b| b.category == "Food").collect();
        assert_eq!(food_budgets.len(), 1);
        assert_eq!(food_budgets[0].amount, dec!(750));
    }

    // ==================== service ====================

    #[tokio::test]
    async fn test_set_budget_inserts_for_new_category() {
        let store = MockStore::new();
        let service = BudgetService::new(Arc::new(store.clone()));

        service
            .set_budget(
                &[],
                "user-1",
                NewBudget {
                    category: "Food".to_string(),
                    amount: dec!(500),
                },
            )
            .await
            .unwrap();

        let ops = store.operations();
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            MockOperation::Insert { collection, fields } => {
                assert_eq!(collection, BUDGETS_COLLECTION);
                assert_eq!(fields["category"], json!("Food"));
                assert_eq!(fields["amount"], json!("500"));
            }
            other => panic!("Expected Insert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_budget_updates_existing_category_in_one_call() {
        let store = MockStore::new();
        let service = BudgetService::new(Arc::new(store.clone()));
        let existing = vec![budget("b1", "Food", dec!(500))];

        service
            .set_budget(
                &existing,
                "user-1",
                NewBudget {
                    category: "Food".to_string(),
                    amount: dec!(600),
                },
            )
            .await
            .unwrap();

        let ops = store.operations();
        assert_eq!(ops.len(), 1);
        match &ops[0] {
            MockOperation::Update { collection, id, fields } => {
                assert_eq!(collection, BUDGETS_COLLECTION);
                assert_eq!(id, "b1");
                assert_eq!(fields["amount"], json!("600"));
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_budget_rejects_non_positive_amount() {
        let store = MockStore::new();
        let service = BudgetService::new(Arc::new(store.clone()));

        let result = service
            .set_budget(
                &[],
                "user-1",
                NewBudget {
                    category: "Food".to_string(),
                    amount: dec!(0),
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(store.operations().is_empty());
    }
}
