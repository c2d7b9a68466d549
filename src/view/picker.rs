//! Date-picker widget contract.
//!
//! The actual widget is third-party and lives with the host. The form only
//! needs a handle it can release at teardown and a factory it can ask for
//! fresh instances carrying the right bounds.

use chrono::NaiveTime;

/// Construction-time configuration for one picker instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerConfig {
    /// Initial selection shown by the widget.
    pub default_time: Option<NaiveTime>,
    /// Earliest selectable time.
    pub min_time: Option<NaiveTime>,
    /// Latest selectable time.
    pub max_time: Option<NaiveTime>,
}

/// A live date-picker widget handle.
pub trait DatePicker {
    /// Releases the widget. Called exactly once per handle.
    fn destroy(&mut self);
}

/// Creates picker instances for the form view.
pub trait PickerFactory {
    fn create(&self, config: PickerConfig) -> Box<dyn DatePicker>;
}

/// Factory for hosts without a date-picker widget; hands out inert handles.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPickerFactory;

struct NullPicker;

impl DatePicker for NullPicker {
    #[mutants::skip]
    fn destroy(&mut self) {}
}

impl PickerFactory for NullPickerFactory {
    fn create(&self, _config: PickerConfig) -> Box<dyn DatePicker> {
        Box::new(NullPicker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_unbounded() {
        let config = PickerConfig::default();
        assert_eq!(config.default_time, None);
        assert_eq!(config.min_time, None);
        assert_eq!(config.max_time, None);
    }

    #[test]
    fn null_factory_hands_out_destroyable_handles() {
        let mut handle = NullPickerFactory.create(PickerConfig::default());
        handle.destroy();
    }
}
