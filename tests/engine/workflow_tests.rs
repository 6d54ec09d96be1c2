//! Multi-command workflows against the catalog, driven the way the shell
//! drives it: one detail string per step.

use larder_engine::{Event, FoodLog, GroceryCatalog, NullSink, StockSignal, UserProfile};
use larder_foundation::ErrorKind;

fn catalog() -> GroceryCatalog<NullSink> {
    GroceryCatalog::new(NullSink)
}

// =============================================================================
// Grocery Lifecycle
// =============================================================================

#[test]
fn full_lifecycle_of_one_grocery() {
    let mut catalog = catalog();

    catalog.add("Oat Milk").unwrap();
    catalog.set_category("Oat Milk c/dairy free").unwrap();
    catalog.set_amount("Oat Milk a/4", false).unwrap();
    catalog.set_threshold("Oat Milk a/1").unwrap();
    catalog.set_cost("Oat Milk $3.20").unwrap();
    catalog.set_remark("Oat Milk r/shake before use").unwrap();
    catalog.assign_location("Oat Milk l/Pantry").unwrap();
    catalog.set_expiration("Oat Milk d/2999-12-31").unwrap();
    catalog.set_rating("Oat Milk", 5, "the good stuff").unwrap();

    let grocery = catalog.get("oat milk").unwrap();
    assert_eq!(grocery.name, "Oat Milk");
    assert_eq!(grocery.category, "DAIRY FREE");
    assert_eq!(grocery.amount, 4);
    assert_eq!(grocery.threshold, 1);
    assert_eq!(grocery.cost, "3.20".parse().unwrap());
    assert_eq!(grocery.remark, "shake before use");
    assert_eq!(grocery.location.as_deref(), Some("pantry"));
    assert_eq!(grocery.rating, Some(5));

    let Event::Removed { remaining, grocery } = catalog.remove("Oat Milk").unwrap() else {
        panic!("expected Removed");
    };
    assert_eq!(remaining, 0);
    assert_eq!(grocery.name, "Oat Milk");
    assert!(catalog.locations().get("pantry").unwrap().members.is_empty());
}

#[test]
fn draining_stock_walks_through_every_signal() {
    let mut catalog = catalog();
    catalog.add("Eggs").unwrap();
    catalog.set_amount("Eggs a/6", false).unwrap();
    catalog.set_threshold("Eggs a/2").unwrap();

    let signals: Vec<StockSignal> = ["a/3", "a/2", "a/1"]
        .iter()
        .map(|payload| {
            let Event::AmountSet { signal, .. } = catalog
                .set_amount(&format!("Eggs {payload}"), true)
                .unwrap()
            else {
                panic!("expected AmountSet");
            };
            signal
        })
        .collect();
    assert_eq!(
        signals,
        [StockSignal::Updated, StockSignal::LowStock, StockSignal::Depleted]
    );

    // A further use hits the empty-stock guard, not a negative amount.
    let err = catalog.set_amount("Eggs a/1", true).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::CannotUse));
}

#[test]
fn failed_edit_never_touches_other_fields() {
    let mut catalog = catalog();
    catalog.add("Milk").unwrap();
    catalog.set_amount("Milk a/5", false).unwrap();
    catalog.set_cost("Milk $2.00").unwrap();

    assert!(catalog.set_expiration("Milk d/1999-01-01").is_err());
    assert!(catalog.set_cost("Milk $minus").is_err());
    assert!(catalog.set_amount("Milk a/0", false).is_err());

    let grocery = catalog.get("Milk").unwrap();
    assert_eq!(grocery.amount, 5);
    assert_eq!(grocery.cost, "2.00".parse().unwrap());
    assert_eq!(grocery.expiration, None);
}

// =============================================================================
// Locations Across Records
// =============================================================================

#[test]
fn locations_are_shared_across_groceries() {
    let mut catalog = catalog();
    catalog.add("Milk").unwrap();
    catalog.add("Butter").unwrap();

    let Event::LocationSet { created, .. } = catalog.assign_location("Milk l/Fridge").unwrap()
    else {
        panic!("expected LocationSet");
    };
    assert!(created);

    // Second assignment reuses the registry entry, case-insensitively.
    let Event::LocationSet { created, location, .. } =
        catalog.assign_location("Butter l/FRIDGE").unwrap()
    else {
        panic!("expected LocationSet");
    };
    assert!(!created);
    assert_eq!(location, "Fridge");

    let fridge = catalog.locations().get("fridge").unwrap();
    assert_eq!(fridge.members.len(), 2);
    assert_eq!(catalog.locations().len(), 1);
}

#[test]
fn emptied_locations_stay_registered() {
    let mut catalog = catalog();
    catalog.add("Milk").unwrap();
    catalog.assign_location("Milk l/Fridge").unwrap();
    catalog.assign_location("Milk l/Freezer").unwrap();

    // The fridge is empty now but still known, so a later assignment
    // does not report it as newly created.
    let Event::LocationSet { created, .. } = catalog.assign_location("Milk l/fridge").unwrap()
    else {
        panic!("expected LocationSet");
    };
    assert!(!created);
}

// =============================================================================
// Reports Over a Populated Catalog
// =============================================================================

fn stocked_catalog() -> GroceryCatalog<NullSink> {
    let mut catalog = catalog();
    for (name, cost, category) in [
        ("Milk", "4.50", "dairy"),
        ("Rice", "8.00", "staples"),
        ("Butter", "4.50", "dairy"),
    ] {
        catalog.add(name).unwrap();
        catalog.set_cost(&format!("{name} ${cost}")).unwrap();
        catalog.set_category(&format!("{name} c/{category}")).unwrap();
    }
    catalog
}

#[test]
fn find_matches_substrings_in_collection_order() {
    let catalog = stocked_catalog();
    let Event::Found { matches, keyword } = catalog.find("i").unwrap() else {
        panic!("expected Found");
    };
    assert_eq!(keyword, "i");
    let names: Vec<_> = matches.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Milk", "Rice"]);
}

#[test]
fn cost_sort_keeps_ties_in_entry_order() {
    let mut catalog = stocked_catalog();
    let Event::Listing { groceries, .. } = catalog.sort_by_cost() else {
        panic!("expected Listing");
    };
    let names: Vec<_> = groceries.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Rice", "Milk", "Butter"]);
}

#[test]
fn category_sort_groups_records() {
    let mut catalog = stocked_catalog();
    let Event::Listing { groceries, .. } = catalog.sort_by_category() else {
        panic!("expected Listing");
    };
    let categories: Vec<_> = groceries.iter().map(|g| g.category.as_str()).collect();
    assert_eq!(categories, ["DAIRY", "DAIRY", "STAPLES"]);
}

// =============================================================================
// Calorie Log and Profile
// =============================================================================

#[test]
fn a_day_of_eating_adds_up() {
    let mut log = FoodLog::new();
    log.eat("porridge", 310.0).unwrap();
    log.eat("sandwich", 420.5).unwrap();
    log.eat("apple", 95.0).unwrap();

    assert_eq!(log.foods().len(), 3);
    assert!((log.total_calories() - 825.5).abs() < 1e-9);

    // A rejected entry leaves the log as it was.
    assert!(log.eat("mystery meal", f64::NAN).is_err());
    assert_eq!(log.foods().len(), 3);
}

#[test]
fn profile_update_replaces_everything() {
    let mut profile = UserProfile::new();
    profile
        .update("Alex", 82.0, 180.0, 41, "m", "active", "lose")
        .unwrap();
    profile
        .update("Alex", 80.5, 180.0, 41, "m", "very active", "maintain")
        .unwrap();

    assert!((profile.weight - 80.5).abs() < f64::EPSILON);
    assert_eq!(profile.activeness, "very active");
    assert_eq!(profile.aim, "maintain");
}
