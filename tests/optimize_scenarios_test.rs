use assert_float_eq::assert_float_absolute_eq;

use budget_basket_rs::catalog::{builtin_catalog, IngredientId};
use budget_basket_rs::models::{FoodItem, SavingsStatus};
use budget_basket_rs::optimizer::optimize;

fn item(id: &str, quantity: f64) -> FoodItem {
    builtin_catalog()
        .entry(&IngredientId::new(id))
        .unwrap()
        .to_item(quantity)
}

fn total(items: &[FoodItem]) -> f64 {
    items.iter().map(|i| i.estimated_price).sum()
}

#[test]
fn test_list_already_within_budget() {
    let items = vec![item("chicken-breast", 1.0), item("white-rice", 2.0)];
    let total_cost = total(&items);
    assert_float_absolute_eq!(total_cost, 12.97, 0.001);

    let result = optimize(&items, total_cost, 50.0, &[]).unwrap();

    assert_eq!(result.savings_status, SavingsStatus::WithinSavings);
    assert!(result.substitutions_applied.is_empty());
    assert_float_absolute_eq!(result.total_estimated_cost, 12.97, 0.001);
}

#[test]
fn test_expensive_protein_swapped_first() {
    let items = vec![
        item("salmon-fillet", 2.0),
        item("chicken-breast", 1.0),
        item("white-rice", 3.0),
    ];
    let total_cost = total(&items);
    assert_float_absolute_eq!(total_cost, 53.44, 0.001);

    let result = optimize(&items, total_cost, 30.0, &[]).unwrap();

    assert!(!result.substitutions_applied.is_empty());
    assert_eq!(result.substitutions_applied[0].from_name, "Salmon fillet");
    assert!(result.total_estimated_cost < 53.44);
    assert_eq!(result.savings_status, SavingsStatus::AdjustedToSavings);
}

#[test]
fn test_floor_protein_cannot_be_swapped() {
    let items = vec![item("chicken-breast", 10.0)];
    let total_cost = total(&items);
    assert_float_absolute_eq!(total_cost, 79.90, 0.001);

    let result = optimize(&items, total_cost, 20.0, &[]).unwrap();

    assert_eq!(result.savings_status, SavingsStatus::OverSavingsMinimum);
    assert!(result.total_estimated_cost > 20.0);
    assert!(result.substitutions_applied.is_empty());
}

#[test]
fn test_efficiency_score_is_protein_per_euro() {
    let baskets = vec![
        vec![item("chicken-breast", 1.0), item("white-rice", 2.0)],
        vec![
            item("salmon-fillet", 2.0),
            item("chicken-breast", 1.0),
            item("white-rice", 3.0),
        ],
        vec![item("chicken-breast", 10.0)],
    ];

    for items in baskets {
        let result = optimize(&items, total(&items), 30.0, &[]).unwrap();
        assert_float_absolute_eq!(
            result.efficiency_score,
            result.total_protein / result.total_estimated_cost,
            0.005
        );
    }
}

#[test]
fn test_exclusion_falls_back_to_other_candidate() {
    let items = vec![
        item("salmon-fillet", 2.0),
        item("chicken-breast", 1.0),
        item("white-rice", 3.0),
    ];
    let excluded = vec!["Canned tuna".to_string()];

    let result = optimize(&items, total(&items), 30.0, &excluded).unwrap();

    assert!(!result.substitutions_applied.is_empty());
    assert!(result.items.iter().all(|i| i.name != "Canned tuna"));
    assert!(result
        .substitutions_applied
        .iter()
        .all(|s| s.to_name != "Canned tuna"));
}

#[test]
fn test_all_candidates_blocked_leaves_item_in_place() {
    // With tuna and thigh excluded, the only remaining salmon candidate
    // (chicken breast) would collapse the list to one protein name.
    let items = vec![
        item("salmon-fillet", 2.0),
        item("chicken-breast", 1.0),
        item("white-rice", 3.0),
    ];
    let excluded = vec!["Canned tuna".to_string(), "Chicken thigh".to_string()];

    let result = optimize(&items, total(&items), 30.0, &excluded).unwrap();

    assert!(result.substitutions_applied.is_empty());
    assert_eq!(result.savings_status, SavingsStatus::OverSavingsMinimum);
    assert!(result.items.iter().any(|i| i.name == "Salmon fillet"));
}

#[test]
fn test_protein_swap_cap_limits_substitutions() {
    let items = vec![
        item("salmon-fillet", 2.0),
        item("beef-mince", 2.0),
        item("turkey-breast", 2.0),
        item("pork-loin", 2.0),
    ];

    // Budget far below anything reachable: the driver swaps until the
    // protein cap shuts the selector down.
    let result = optimize(&items, total(&items), 10.0, &[]).unwrap();

    assert_eq!(result.substitutions_applied.len(), 2);
    assert_eq!(result.savings_status, SavingsStatus::OverSavingsMinimum);
}

#[test]
fn test_substitution_reason_mentions_category_and_protein() {
    let items = vec![
        item("salmon-fillet", 2.0),
        item("chicken-breast", 1.0),
        item("white-rice", 3.0),
    ];

    let result = optimize(&items, total(&items), 30.0, &[]).unwrap();

    let reason = &result.substitutions_applied[0].reason;
    assert!(reason.contains("proteins"), "reason was: {reason}");
    assert!(reason.contains("protein"), "reason was: {reason}");
}

#[test]
fn test_grain_swap_when_proteins_are_settled() {
    let items = vec![
        item("quinoa", 2.0),
        item("chicken-breast", 1.0),
        item("canned-tuna", 1.0),
    ];
    let total_cost = total(&items);

    // Quinoa (18.98) -> white rice (4.98) is the only available saving.
    let result = optimize(&items, total_cost, 20.0, &[]).unwrap();

    assert_eq!(result.substitutions_applied.len(), 1);
    assert_eq!(result.substitutions_applied[0].from_name, "Quinoa");
    assert_eq!(result.substitutions_applied[0].to_name, "White rice");
    assert_eq!(result.savings_status, SavingsStatus::AdjustedToSavings);
}
