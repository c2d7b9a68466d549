//! The edit form view: the component tying state, markup, and pickers
//! together.

use std::rc::Rc;

use crate::model::{Destination, OfferCatalog, TIME_FORMAT, TripEvent};

use super::event::{ElementUpdate, FormEvent};
use super::markup;
use super::picker::{DatePicker, PickerConfig, PickerFactory};
use super::state::{StatePatch, ViewState};

/// Caller-supplied reactions to form-level actions.
pub struct EditFormCallbacks {
    /// Invoked when the rollup (close) control is clicked.
    pub on_close: Box<dyn FnMut()>,
    /// Invoked with the normalized record when the form is submitted.
    pub on_submit: Box<dyn FnMut(TripEvent)>,
    /// Invoked with the raw working state when the delete control is
    /// clicked. Delete does not need the normalized shape.
    pub on_delete: Box<dyn FnMut(ViewState)>,
}

/// Form view for editing a single [`TripEvent`].
///
/// Holds the working [`ViewState`], a cache of the rendered element, and the
/// two date-picker handles. Interactions arrive as [`FormEvent`] values;
/// state changes flow through the [`StatePatch`] reducer, which decides
/// whether the cached element is rebuilt or reused.
pub struct EditFormView {
    state: ViewState,
    markup: String,
    catalog: OfferCatalog,
    callbacks: EditFormCallbacks,
    picker_factory: Box<dyn PickerFactory>,
    start_picker: Option<Box<dyn DatePicker>>,
    end_picker: Option<Box<dyn DatePicker>>,
}

impl EditFormView {
    /// Creates the view: derives the working state from `trip_event`,
    /// renders the element, and binds both date pickers.
    pub fn new(
        trip_event: TripEvent,
        cities: Rc<[String]>,
        destinations: Rc<[Destination]>,
        catalog: OfferCatalog,
        callbacks: EditFormCallbacks,
        picker_factory: Box<dyn PickerFactory>,
    ) -> Self {
        let state = ViewState::from_trip_event(trip_event, cities, destinations);
        let markup = markup::edit_form(&state);
        let mut view = Self {
            state,
            markup,
            catalog,
            callbacks,
            picker_factory,
            start_picker: None,
            end_picker: None,
        };
        view.bind_pickers();
        view
    }

    /// The rendered element for the current state.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Read access to the working state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Discards in-progress edits, rebuilding the state wholesale from a
    /// fresh record.
    pub fn reset(&mut self, trip_event: TripEvent) {
        self.state = ViewState::from_trip_event(
            trip_event,
            Rc::clone(&self.state.cities),
            Rc::clone(&self.state.destinations),
        );
        self.markup = markup::edit_form(&self.state);
        self.bind_pickers();
    }

    /// Releases both picker handles and drops the rendered element.
    ///
    /// Callable any number of times; handles that were never created or were
    /// already released are skipped.
    pub fn teardown(&mut self) {
        self.release_pickers();
        self.markup.clear();
    }

    /// Handles one form event, returning whether the rendered element was
    /// rebuilt.
    pub fn handle_event(&mut self, event: FormEvent) -> ElementUpdate {
        match event {
            FormEvent::RollupClicked => {
                (self.callbacks.on_close)();
                ElementUpdate::Unchanged
            }
            FormEvent::DeleteClicked => {
                (self.callbacks.on_delete)(self.state.clone());
                ElementUpdate::Unchanged
            }
            FormEvent::Submitted => {
                (self.callbacks.on_submit)(self.state.to_trip_event());
                ElementUpdate::Unchanged
            }
            FormEvent::DestinationEntered(name) => {
                let destination = self.state.find_destination(&name);
                self.apply(StatePatch::Destination(destination))
            }
            FormEvent::TypeSelected(event_type) => {
                let offers = self.catalog.offers_for(&event_type);
                self.apply(StatePatch::EventType { event_type, offers })
            }
            FormEvent::OffersPanelClick { offer_id } => match offer_id {
                Some(id) => self.apply(StatePatch::OfferToggled(id)),
                // Clicks that miss a checkbox fall through untouched.
                None => ElementUpdate::Unchanged,
            },
            FormEvent::PriceEntered(raw) => {
                let price = raw.trim().parse().unwrap_or(0);
                self.apply(StatePatch::BasePrice(price))
            }
            FormEvent::StartPickerClosed(selected) => {
                let time = selected.time();
                if let Ok(end) = self.state.schedule.end_time()
                    && time > end
                {
                    // The max bound the picker was configured with must hold
                    // even if the widget misreports; refuse the commit.
                    return ElementUpdate::Unchanged;
                }
                self.apply(StatePatch::DateFrom(time.format(TIME_FORMAT).to_string()))
            }
            FormEvent::EndPickerClosed(selected) => {
                let time = selected.time();
                if let Ok(start) = self.state.schedule.start_time()
                    && time < start
                {
                    return ElementUpdate::Unchanged;
                }
                self.apply(StatePatch::DateTo(time.format(TIME_FORMAT).to_string()))
            }
        }
    }

    /// Runs one patch through the reducer, rebuilding the markup cache and
    /// re-binding pickers when the patch calls for it.
    fn apply(&mut self, patch: StatePatch) -> ElementUpdate {
        if self.state.apply(patch) {
            self.markup = markup::edit_form(&self.state);
            self.bind_pickers();
            ElementUpdate::Rebuilt
        } else {
            ElementUpdate::Unchanged
        }
    }

    /// (Re)creates both picker handles, releasing any prior instances first
    /// so a new picker is never constructed over a live one.
    ///
    /// Each side of the schedule bounds the other: `date_to` caps the start
    /// picker, `date_from` floors the end picker. A malformed stored time
    /// leaves that side unbounded.
    fn bind_pickers(&mut self) {
        self.release_pickers();
        let start_time = self.state.schedule.start_time().ok();
        let end_time = self.state.schedule.end_time().ok();
        self.start_picker = Some(self.picker_factory.create(PickerConfig {
            default_time: start_time,
            min_time: None,
            max_time: end_time,
        }));
        self.end_picker = Some(self.picker_factory.create(PickerConfig {
            default_time: end_time,
            min_time: start_time,
            max_time: None,
        }));
    }

    fn release_pickers(&mut self) {
        if let Some(mut picker) = self.start_picker.take() {
            picker.destroy();
        }
        if let Some(mut picker) = self.end_picker.take() {
            picker.destroy();
        }
    }
}
