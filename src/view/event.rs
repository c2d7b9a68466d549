//! Typed form events and the element-update signal handlers return.

use chrono::NaiveDateTime;

/// A user interaction delivered to the [`EditFormView`](super::EditFormView).
///
/// Each variant is the typed rendition of one raw browser event the host
/// wires up on the rendered fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// Click on the rollup (close) control.
    RollupClicked,
    /// Click on the delete control.
    DeleteClicked,
    /// Submit on the form.
    Submitted,
    /// Change committed on the destination input, with the typed name.
    DestinationEntered(String),
    /// Input on the event-type selector group, with the selected type key.
    TypeSelected(String),
    /// Click inside the offers panel. `offer_id` is `None` when the click
    /// did not land on an offer checkbox.
    OffersPanelClick { offer_id: Option<u32> },
    /// Input on the price field, raw text.
    PriceEntered(String),
    /// The start date picker closed with a selection.
    StartPickerClosed(NaiveDateTime),
    /// The end date picker closed with a selection.
    EndPickerClosed(NaiveDateTime),
}

/// Whether handling an event rebuilt the rendered element.
///
/// Hosts swap the mounted fragment on [`ElementUpdate::Rebuilt`] and leave
/// it in place on [`ElementUpdate::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementUpdate {
    Unchanged,
    Rebuilt,
}
