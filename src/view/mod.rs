//! The edit-form view: working state, typed events, markup rendering, and
//! the date-picker contract.

pub mod edit_form;
pub mod event;
pub mod markup;
pub mod picker;
pub mod state;

pub use edit_form::{EditFormCallbacks, EditFormView};
pub use event::{ElementUpdate, FormEvent};
pub use picker::{DatePicker, NullPickerFactory, PickerConfig, PickerFactory};
pub use state::{StatePatch, ViewState};
