#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Markup preview: renders the edit form for a bundled sample event to
//! stdout, so the fragment can be piped to a file and opened in a browser.

use std::io::{Write, stdout};
use std::rc::Rc;

use chrono::NaiveDate;

use tripform::model::{Destination, EventSchedule, OfferCatalog, TripEvent};
use tripform::view::{EditFormCallbacks, EditFormView, NullPickerFactory};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let destinations: Rc<[Destination]> = Rc::from(vec![
        Destination::new(
            "Amsterdam",
            "Canals, gabled houses, and a lot of bicycles.",
            "img/amsterdam.jpg",
            "Amsterdam canal",
        ),
        Destination::new(
            "Chamonix",
            "Alpine resort at the foot of Mont Blanc.",
            "img/chamonix.jpg",
            "Mont Blanc",
        ),
        Destination::new(
            "Geneva",
            "Lakeside city ringed by the Alps.",
            "img/geneva.jpg",
            "Geneva lake",
        ),
    ]);
    let cities: Rc<[String]> = Rc::from(
        destinations
            .iter()
            .map(|d| d.name.clone())
            .collect::<Vec<_>>(),
    );

    let catalog = OfferCatalog::builtin();
    let mut offers = catalog.offers_for("flight");
    if let Some(first) = offers.first_mut() {
        first.is_checked = true;
    }

    let event = TripEvent {
        event_type: "flight".to_string(),
        destination: destinations.first().cloned(),
        event_date: "2025-03-18".parse::<NaiveDate>()?,
        schedule: EventSchedule::new("10:30", "12:15"),
        offers,
        base_price: 160,
    };

    let callbacks = EditFormCallbacks {
        on_close: Box::new(|| {}),
        on_submit: Box::new(|_| {}),
        on_delete: Box::new(|_| {}),
    };

    let view = EditFormView::new(
        event,
        cities,
        destinations,
        catalog,
        callbacks,
        Box::new(NullPickerFactory),
    );

    let mut out = stdout();
    out.write_all(view.markup().as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
