//! The form's working state and its typed patch reducer.

use std::rc::Rc;

use chrono::NaiveDate;

use crate::model::{Destination, EventSchedule, Offer, TripEvent};

/// A recognized partial update to [`ViewState`].
///
/// Every interactive transition flows through one of these variants; there
/// is no ad hoc field poking from the outside.
#[derive(Debug, Clone, PartialEq)]
pub enum StatePatch {
    /// Replace the destination. A failed lookup patches `None`.
    Destination(Option<Destination>),
    /// Replace the event type together with its offer catalog entry.
    EventType {
        event_type: String,
        offers: Vec<Offer>,
    },
    /// Toggle one offer's selection flag by id. Unknown ids are a no-op.
    OfferToggled(u32),
    /// Replace the base price.
    BasePrice(u64),
    /// Replace the schedule start time.
    DateFrom(String),
    /// Replace the schedule end time.
    DateTo(String),
}

impl StatePatch {
    /// Whether applying this patch requires rebuilding the rendered element.
    ///
    /// Offer toggles and price edits keep the element: the native input
    /// already shows the new value, and a rebuild would re-initialize the
    /// date pickers on every keystroke.
    pub fn rebuilds_element(&self) -> bool {
        !matches!(self, Self::OfferToggled(_) | Self::BasePrice(_))
    }
}

/// The component's working copy of a [`TripEvent`], plus UI-only fields.
///
/// Owned exclusively by one [`EditFormView`](super::EditFormView) instance
/// and mutated only through [`ViewState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub event_type: String,
    pub destination: Option<Destination>,
    pub event_date: NaiveDate,
    pub schedule: EventSchedule,
    pub offers: Vec<Offer>,
    pub base_price: u64,
    /// Derived: at least one offer is currently selected.
    pub is_any_offers: bool,
    /// City names for the destination datalist. Shared, read-only.
    pub cities: Rc<[String]>,
    /// Destination records for name lookup. Shared, read-only.
    pub destinations: Rc<[Destination]>,
}

impl ViewState {
    /// Builds the working state from an external record and the reference
    /// lists, deriving `is_any_offers`.
    pub fn from_trip_event(
        trip_event: TripEvent,
        cities: Rc<[String]>,
        destinations: Rc<[Destination]>,
    ) -> Self {
        let is_any_offers = trip_event.offers.iter().any(|o| o.is_checked);
        Self {
            event_type: trip_event.event_type,
            destination: trip_event.destination,
            event_date: trip_event.event_date,
            schedule: trip_event.schedule,
            offers: trip_event.offers,
            base_price: trip_event.base_price,
            is_any_offers,
            cities,
            destinations,
        }
    }

    /// Normalizes the working state back into the external record shape.
    ///
    /// Transient fields are stripped. When nothing is selected, every
    /// offer's flag is forced off so stale selection state never reaches the
    /// caller.
    pub fn to_trip_event(&self) -> TripEvent {
        let mut offers = self.offers.clone();
        if !self.is_any_offers {
            for offer in &mut offers {
                offer.is_checked = false;
            }
        }
        TripEvent {
            event_type: self.event_type.clone(),
            destination: self.destination.clone(),
            event_date: self.event_date,
            schedule: self.schedule.clone(),
            offers,
            base_price: self.base_price,
        }
    }

    /// Looks up a destination by name in the reference list.
    pub fn find_destination(&self, name: &str) -> Option<Destination> {
        self.destinations.iter().find(|d| d.name == name).cloned()
    }

    /// Applies one patch, keeping `is_any_offers` consistent.
    ///
    /// Returns `true` when the patch requires a markup rebuild.
    pub fn apply(&mut self, patch: StatePatch) -> bool {
        let rebuilds = patch.rebuilds_element();
        match patch {
            StatePatch::Destination(destination) => self.destination = destination,
            StatePatch::EventType { event_type, offers } => {
                self.event_type = event_type;
                self.offers = offers;
                self.recompute_is_any_offers();
            }
            StatePatch::OfferToggled(id) => {
                if let Some(offer) = self.offers.iter_mut().find(|o| o.id == id) {
                    offer.is_checked = !offer.is_checked;
                }
                self.recompute_is_any_offers();
            }
            StatePatch::BasePrice(price) => self.base_price = price,
            StatePatch::DateFrom(value) => self.schedule.date_from = value,
            StatePatch::DateTo(value) => self.schedule.date_to = value,
        }
        rebuilds
    }

    fn recompute_is_any_offers(&mut self) {
        self.is_any_offers = self.offers.iter().any(|o| o.is_checked);
    }
}
