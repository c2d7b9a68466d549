//! HTML rendering for the edit form.
//!
//! Pure formatting functions from [`ViewState`] to markup text, no DOM and
//! no I/O. The host mounts the fragment and wires raw events back through
//! [`FormEvent`](super::FormEvent). Values are interpolated as-is; escaping
//! belongs to the host's templating layer.

use crate::model::{Destination, Offer, Picture, TRIP_EVENT_TYPES};

use super::state::ViewState;

/// Date part of the schedule inputs ("18/03/25"), combined with the
/// time-only schedule fields for display.
pub const DATE_DISPLAY_FORMAT: &str = "%d/%m/%y";

fn event_type_item(event_type: &str, selected: bool) -> String {
    let checked = if selected { " checked" } else { "" };
    format!(
        r#"<div class="event__type-item">
  <input id="event-type-{event_type}-1" class="event__type-input  visually-hidden" type="radio" name="event-type" value="{event_type}"{checked}>
  <label class="event__type-label  event__type-label--{event_type}" for="event-type-{event_type}-1">{event_type}</label>
</div>
"#
    )
}

fn offer_selector(offer: &Offer) -> String {
    let checked = if offer.is_checked { " checked" } else { "" };
    format!(
        r#"<div class="event__offer-selector">
  <input class="event__offer-checkbox  visually-hidden" id="event-offer-{id}-1" type="checkbox" name="event-offer-{id}" data-offer-id="{id}"{checked}>
  <label class="event__offer-label" for="event-offer-{id}-1">
    <span class="event__offer-title">{title}</span>
    &plus;&euro;&nbsp;
    <span class="event__offer-price">{price}</span>
  </label>
</div>
"#,
        id = offer.id,
        title = offer.title,
        price = offer.price,
    )
}

fn offers_section(offers: &[Offer]) -> String {
    let selectors: String = offers.iter().map(offer_selector).collect();
    format!(
        r#"<section class="event__section  event__section--offers">
  <h3 class="event__section-title  event__section-title--offers">Offers</h3>
  <div class="event__available-offers">
{selectors}  </div>
</section>
"#
    )
}

fn photo_tape(picture: &Picture) -> String {
    format!(
        r#"<div class="event__photos-container">
  <div class="event__photos-tape">
    <img class="event__photo" src="{src}" alt="{alt}">
  </div>
</div>
"#,
        src = picture.src,
        alt = picture.description,
    )
}

fn destination_section(destination: &Destination) -> String {
    format!(
        r#"<section class="event__section  event__section--destination">
  <h3 class="event__section-title  event__section-title--destination">Destination</h3>
  <p class="event__destination-description">{description}</p>
{photos}</section>
"#,
        description = destination.description,
        photos = photo_tape(&destination.picture),
    )
}

/// Renders the whole edit form for the given state.
///
/// Pure: identical state yields identical markup. The offers section is
/// present only when the state carries offers, the destination section only
/// when a destination is set.
pub fn edit_form(state: &ViewState) -> String {
    let type_items: String = TRIP_EVENT_TYPES
        .iter()
        .map(|event_type| event_type_item(event_type, *event_type == state.event_type))
        .collect();
    let city_options: String = state
        .cities
        .iter()
        .map(|city| format!("<option value=\"{city}\"></option>\n"))
        .collect();
    let event_city = state
        .destination
        .as_ref()
        .map(|d| d.name.as_str())
        .unwrap_or_default();
    let event_date = state.event_date.format(DATE_DISPLAY_FORMAT);

    let mut details = String::new();
    if !state.offers.is_empty() {
        details.push_str(&offers_section(&state.offers));
    }
    if let Some(ref destination) = state.destination {
        details.push_str(&destination_section(destination));
    }
    if !details.is_empty() {
        details = format!("<section class=\"event__details\">\n{details}</section>\n");
    }

    format!(
        r##"<form class="event  event--edit" action="#" method="post">
  <header class="event__header">
    <div class="event__type-wrapper">
      <label class="event__type  event__type-btn" for="event-type-toggle-1">
        <span class="visually-hidden">Choose event type</span>
        <img class="event__type-icon" width="17" height="17" src="img/icons/{event_type}.png" alt="Event type icon">
      </label>
      <input class="event__type-toggle  visually-hidden" id="event-type-toggle-1" type="checkbox">
      <div class="event__type-list">
        <fieldset class="event__type-group">
          <legend class="visually-hidden">Event type</legend>
{type_items}        </fieldset>
      </div>
    </div>

    <div class="event__field-group  event__field-group--destination">
      <label class="event__label  event__type-output" for="event-destination-1">{event_type}</label>
      <input class="event__input  event__input--destination" id="event-destination-1" type="text" name="event-destination" value="{event_city}" list="destination-list-1">
      <datalist id="destination-list-1">
{city_options}      </datalist>
    </div>

    <div class="event__field-group  event__field-group--time">
      <label class="visually-hidden" for="event-start-time-1">From</label>
      <input class="event__input  event__input--time" id="event-start-time-1" type="text" name="event-start-time" value="{event_date} {date_from}">
      &mdash;
      <label class="visually-hidden" for="event-end-time-1">To</label>
      <input class="event__input  event__input--time" id="event-end-time-1" type="text" name="event-end-time" value="{event_date} {date_to}">
    </div>

    <div class="event__field-group  event__field-group--price">
      <label class="event__label" for="event-price-1">
        <span class="visually-hidden">Price</span>
        &euro;
      </label>
      <input class="event__input  event__input--price" id="event-price-1" type="text" name="event-price" value="{base_price}">
    </div>

    <button class="event__save-btn  btn  btn--blue" type="submit">Save</button>
    <button class="event__reset-btn" type="reset">Delete</button>
    <button class="event__rollup-btn" type="button">
      <span class="visually-hidden">Open event</span>
    </button>
  </header>
{details}</form>"##,
        event_type = state.event_type,
        date_from = state.schedule.date_from,
        date_to = state.schedule.date_to,
        base_price = state.base_price,
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use chrono::NaiveDate;

    use crate::model::{EventSchedule, TripEvent};

    use super::*;

    fn make_offers() -> Vec<Offer> {
        let mut uber = Offer::new(1, "Order Uber", 20);
        uber.is_checked = true;
        vec![uber, Offer::new(2, "Upgrade to a business class", 120)]
    }

    fn make_state() -> ViewState {
        ViewState::from_trip_event(
            TripEvent {
                event_type: "taxi".to_string(),
                destination: Some(Destination::new(
                    "Geneva",
                    "Lakeside city.",
                    "img/geneva.jpg",
                    "Geneva lake",
                )),
                event_date: NaiveDate::from_ymd_opt(2025, 3, 18).unwrap(),
                schedule: EventSchedule::new("10:30", "11:00"),
                offers: make_offers(),
                base_price: 120,
            },
            Rc::from(vec![
                "Amsterdam".to_string(),
                "Chamonix".to_string(),
                "Geneva".to_string(),
            ]),
            Rc::from(Vec::<Destination>::new()),
        )
    }

    #[test]
    fn stable_classes_present() {
        let html = edit_form(&make_state());
        for class in [
            "event__type-toggle",
            "event__input--destination",
            "event__input--time",
            "event__input--price",
            "event__save-btn",
            "event__reset-btn",
            "event__rollup-btn",
            "event__available-offers",
            "event__type-group",
        ] {
            assert!(html.contains(class), "missing class {class}");
        }
    }

    #[test]
    fn identical_state_renders_identically() {
        let state = make_state();
        assert_eq!(edit_form(&state), edit_form(&state));
    }

    #[test]
    fn shows_type_destination_and_price() {
        let html = edit_form(&make_state());
        assert!(html.contains("taxi"));
        assert!(html.contains("Geneva"));
        assert!(html.contains(r#"value="120""#));
    }

    #[test]
    fn both_time_inputs_combine_date_and_time() {
        let html = edit_form(&make_state());
        assert!(html.contains(r#"value="18/03/25 10:30""#));
        assert!(html.contains(r#"value="18/03/25 11:00""#));
    }

    #[test]
    fn current_type_radio_is_checked() {
        let html = edit_form(&make_state());
        assert!(html.contains(r#"value="taxi" checked"#));
        assert!(!html.contains(r#"value="bus" checked"#));
    }

    #[test]
    fn renders_one_item_per_known_type() {
        let html = edit_form(&make_state());
        assert_eq!(
            html.matches("event__type-item").count(),
            TRIP_EVENT_TYPES.len()
        );
    }

    #[test]
    fn offer_checkboxes_reflect_selection() {
        let html = edit_form(&make_state());
        assert!(html.contains(r#"data-offer-id="1" checked"#));
        assert!(html.contains(r#"data-offer-id="2">"#));
    }

    #[test]
    fn datalist_lists_every_city() {
        let html = edit_form(&make_state());
        for city in ["Amsterdam", "Chamonix", "Geneva"] {
            assert!(html.contains(&format!(r#"<option value="{city}"></option>"#)));
        }
    }

    #[test]
    fn no_offers_omits_offers_section() {
        let mut state = make_state();
        state.offers.clear();
        let html = edit_form(&state);
        assert!(!html.contains("event__section--offers"));
        assert!(html.contains("event__section--destination"));
    }

    #[test]
    fn no_destination_omits_destination_section() {
        let mut state = make_state();
        state.destination = None;
        let html = edit_form(&state);
        assert!(!html.contains("event__section--destination"));
        assert!(html.contains(r#"value="" list="destination-list-1""#));
    }

    #[test]
    fn no_details_at_all_omits_wrapper() {
        let mut state = make_state();
        state.offers.clear();
        state.destination = None;
        let html = edit_form(&state);
        assert!(!html.contains("event__details"));
    }

    #[test]
    fn full_form_snapshot() {
        let html = edit_form(&make_state());
        insta::assert_snapshot!(html);
    }
}
