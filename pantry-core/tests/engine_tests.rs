//! Cross-module scenarios: the flows the surrounding app actually runs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use pantry_core::{
    aggregate, expiry::partition_by_status, filter, item_waste_value, scale_recipe, Ingredient,
    InventoryItem, PreferenceProfile, Recipe, SkillLevel, SpiceLevel,
};
use uuid::Uuid;

fn curry() -> Recipe {
    Recipe {
        title: "Chickpea Curry".to_string(),
        description: Some("Weeknight curry".to_string()),
        servings: 4,
        ingredients: vec![
            Ingredient {
                name: "chickpeas".to_string(),
                amount: 2.0,
                unit: "cans".to_string(),
            },
            Ingredient {
                name: "coconut milk".to_string(),
                amount: 400.0,
                unit: "ml".to_string(),
            },
        ],
        instructions: vec!["Simmer everything".to_string()],
        nutrition: BTreeMap::from([
            ("calories".to_string(), 520.0),
            ("protein".to_string(), 18.0),
        ]),
        tips: vec![],
        skill_level: Some(SkillLevel::Beginner),
        total_time_minutes: Some(25),
        spice_level: Some(SpiceLevel::Medium),
        cuisine: Some("Indian".to_string()),
        dietary_tags: vec!["vegan".to_string(), "gluten_free".to_string()],
    }
}

fn inventory_item(name: &str, current: f64, original: f64, price: Option<f64>, expiry: NaiveDate) -> InventoryItem {
    InventoryItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        current_quantity: current,
        original_quantity: original,
        unit_name: "g".to_string(),
        expiry_date: expiry,
        added_by_name: "alex".to_string(),
        category_name: Some("Dairy & Eggs".to_string()),
        price,
    }
}

#[test]
fn scaling_leaves_nutrition_untouched() {
    let recipe = curry();
    let before = recipe.nutrition.clone();

    let scaled = scale_recipe(&recipe, 8.0).unwrap();
    assert_eq!(scaled[0].amount, 4.0);
    assert_eq!(scaled[1].amount, 800.0);

    // Nutrition stays per the ORIGINAL serving size, whatever the target.
    assert_eq!(recipe.nutrition, before);
    assert_eq!(recipe.nutrition["calories"], 520.0);
}

#[test]
fn filter_then_scale_round_trip() {
    let mut too_spicy = curry();
    too_spicy.title = "Vindaloo".to_string();
    too_spicy.spice_level = Some(SpiceLevel::ExtraSpicy);

    let profile = PreferenceProfile {
        skill_level: SkillLevel::Intermediate,
        max_cooking_time_minutes: 40,
        spice_level: SpiceLevel::Medium,
        dietary_restrictions: vec!["vegan".to_string()],
        cuisine_preferences: vec![],
        avoid_ingredients: vec![],
    };

    let kept = filter(vec![curry(), too_spicy], &profile);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].title, "Chickpea Curry");

    let scaled = scale_recipe(&kept[0], 6.0).unwrap();
    assert_eq!(scaled[0].display_amount(), "3.0");
}

#[test]
fn thirty_minute_budget_excludes_forty_five_minute_recipe() {
    let mut slow = curry();
    slow.total_time_minutes = Some(45);

    let mut profile = PreferenceProfile::default();
    profile.skill_level = SkillLevel::Advanced;
    profile.spice_level = SpiceLevel::ExtraSpicy;
    profile.max_cooking_time_minutes = 30;

    assert!(filter(vec![slow], &profile).is_empty());
}

#[test]
fn expired_bucket_feeds_waste_aggregation() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
    let items = vec![
        inventory_item(
            "milk",
            4.0,
            10.0,
            Some(100.0),
            NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        ),
        inventory_item(
            "butter",
            1.0,
            1.0,
            Some(3.5),
            NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
        ),
        inventory_item(
            "cream",
            0.5,
            1.0,
            None,
            NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
        ),
    ];

    let report = partition_by_status(items, today);
    assert_eq!(report.expired.len(), 2);

    let summary = aggregate(&report.expired);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_quantity, 4.5);
    // milk contributes 40.00, unpriced cream contributes 0.
    assert_eq!(summary.estimated_waste_value, 40.0);
}

#[test]
fn waste_value_is_additive_over_disjoint_snapshots() {
    let expiry = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
    let batch_one = vec![
        inventory_item("milk", 4.0, 10.0, Some(100.0), expiry),
        inventory_item("eggs", 6.0, 12.0, Some(4.8), expiry),
    ];
    let batch_two = vec![inventory_item("cheese", 2.0, 3.0, Some(9.0), expiry)];

    let combined: Vec<InventoryItem> = batch_one
        .iter()
        .chain(batch_two.iter())
        .cloned()
        .collect();

    let lhs = aggregate(&combined).estimated_waste_value;
    let rhs: f64 = batch_one
        .iter()
        .chain(batch_two.iter())
        .map(item_waste_value)
        .sum();
    assert!((lhs - (rhs * 100.0).round() / 100.0).abs() < 1e-9);
}

#[test]
fn recipe_round_trips_through_json() {
    let json = serde_json::to_string(&curry()).unwrap();
    let back: Recipe = serde_json::from_str(&json).unwrap();
    assert_eq!(back.title, "Chickpea Curry");
    assert_eq!(back.servings, 4);
    assert_eq!(back.spice_level, Some(SpiceLevel::Medium));

    // Catalogs omit optional metadata; those recipes still parse.
    let sparse: Recipe = serde_json::from_str(
        r#"{
            "title": "Toast",
            "servings": 1,
            "ingredients": [{"name": "bread", "amount": 2.0, "unit": "slices"}],
            "instructions": ["Toast the bread"]
        }"#,
    )
    .unwrap();
    assert_eq!(sparse.skill_level, None);
    assert!(sparse.dietary_tags.is_empty());
}
