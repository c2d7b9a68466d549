use std::collections::HashMap;

use super::offer::Offer;

/// Event types the form renders in its type selector, in display order.
pub static TRIP_EVENT_TYPES: &[&str] = &[
    "taxi",
    "bus",
    "train",
    "ship",
    "drive",
    "flight",
    "check-in",
    "sightseeing",
    "restaurant",
];

/// Offer lookup keyed by event type.
///
/// Injected into [`EditFormView`](crate::view::EditFormView) so hosts can
/// swap the table without touching the component. Unknown types resolve to
/// no offers.
#[derive(Debug, Clone, Default)]
pub struct OfferCatalog {
    by_type: HashMap<String, Vec<Offer>>,
}

impl OfferCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the offers available for `event_type`.
    pub fn insert(&mut self, event_type: impl Into<String>, offers: Vec<Offer>) {
        self.by_type.insert(event_type.into(), offers);
    }

    /// The built-in offer table.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            "taxi",
            vec![
                Offer::new(1, "Order Uber", 20),
                Offer::new(2, "Upgrade to a business class", 120),
            ],
        );
        catalog.insert(
            "bus",
            vec![
                Offer::new(3, "Choose seats", 5),
                Offer::new(4, "Travel with pets", 15),
            ],
        );
        catalog.insert(
            "train",
            vec![
                Offer::new(5, "Book a meal", 18),
                Offer::new(6, "Upgrade to a compartment", 80),
            ],
        );
        catalog.insert("ship", vec![Offer::new(7, "Add a cabin upgrade", 150)]);
        catalog.insert("drive", vec![Offer::new(8, "Rent a child seat", 30)]);
        catalog.insert(
            "flight",
            vec![
                Offer::new(9, "Add luggage", 50),
                Offer::new(10, "Switch to comfort", 80),
            ],
        );
        catalog.insert("check-in", vec![Offer::new(11, "Add breakfast", 40)]);
        catalog.insert(
            "sightseeing",
            vec![
                Offer::new(12, "Book tickets", 40),
                Offer::new(13, "Lunch in city", 30),
            ],
        );
        catalog.insert("restaurant", vec![]);
        catalog
    }

    /// Returns the offers for `event_type`, each with its selection cleared.
    ///
    /// Unknown types yield an empty list.
    pub fn offers_for(&self, event_type: &str) -> Vec<Offer> {
        self.by_type
            .get(event_type)
            .map(|offers| {
                offers
                    .iter()
                    .cloned()
                    .map(|mut offer| {
                        offer.is_checked = false;
                        offer
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
