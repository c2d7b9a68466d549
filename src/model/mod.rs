//! Domain records shared with the host application.

mod catalog;
mod destination;
mod offer;
mod trip_event;

pub use catalog::{OfferCatalog, TRIP_EVENT_TYPES};
pub use destination::{Destination, Picture};
pub use offer::Offer;
pub use trip_event::{EventSchedule, ScheduleError, TIME_FORMAT, TripEvent};
