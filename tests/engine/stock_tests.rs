//! Properties of the stock arithmetic.

use larder_engine::{Event, GroceryCatalog, NullSink, StockSignal};
use proptest::prelude::*;

fn catalog_with(amount: u32, threshold: u32) -> GroceryCatalog<NullSink> {
    let mut catalog = GroceryCatalog::new(NullSink);
    catalog.add("Milk").unwrap();
    if amount > 0 {
        catalog
            .set_amount(&format!("Milk a/{amount}"), false)
            .unwrap();
    }
    catalog
        .set_threshold(&format!("Milk a/{threshold}"))
        .unwrap();
    catalog
}

proptest! {
    // Consuming stock can never drive the amount negative, whatever the
    // starting amount and however much is used.
    #[test]
    fn use_saturates_at_zero(start in 1u32..1000, used in 1u32..2000) {
        let mut catalog = catalog_with(start, 0);
        let Event::AmountSet { grocery, .. } =
            catalog.set_amount(&format!("Milk a/{used}"), true).unwrap()
        else {
            panic!("expected AmountSet");
        };
        prop_assert_eq!(grocery.amount, start.saturating_sub(used));
    }

    // The signal is a pure function of the resulting amount and threshold.
    #[test]
    fn signal_matches_resulting_amount(start in 1u32..100, used in 1u32..100, threshold in 0u32..100) {
        let mut catalog = catalog_with(start, threshold);
        let Event::AmountSet { grocery, signal } =
            catalog.set_amount(&format!("Milk a/{used}"), true).unwrap()
        else {
            panic!("expected AmountSet");
        };

        let expected = if grocery.amount == 0 {
            StockSignal::Depleted
        } else if grocery.amount <= threshold {
            StockSignal::LowStock
        } else {
            StockSignal::Updated
        };
        prop_assert_eq!(signal, expected);
    }

    // Replacing the amount stores exactly what was asked for.
    #[test]
    fn replace_stores_the_parsed_amount(start in 0u32..100, next in 1u32..1000) {
        let mut catalog = catalog_with(start, 0);
        catalog.set_amount(&format!("Milk a/{next}"), false).unwrap();
        prop_assert_eq!(catalog.get("Milk").unwrap().amount, next);
    }
}
