use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::destination::Destination;
use super::offer::Offer;

/// Time-of-day pattern used when persisting a picker selection ("14:30").
pub const TIME_FORMAT: &str = "%H:%M";

/// Errors raised when interpreting stored schedule fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A schedule field does not parse in the [`TIME_FORMAT`] pattern.
    #[error("invalid schedule time: {0}")]
    InvalidTime(String),
}

/// Start and end times of one itinerary entry.
///
/// Both fields hold time-only strings, exactly what a date-picker selection
/// is persisted as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventSchedule {
    pub date_from: String,
    pub date_to: String,
}

impl EventSchedule {
    /// Creates a schedule from two time-only strings.
    pub fn new(date_from: impl Into<String>, date_to: impl Into<String>) -> Self {
        Self {
            date_from: date_from.into(),
            date_to: date_to.into(),
        }
    }

    /// Parses `date_from` as a time of day.
    pub fn start_time(&self) -> Result<NaiveTime, ScheduleError> {
        parse_time(&self.date_from)
    }

    /// Parses `date_to` as a time of day.
    pub fn end_time(&self) -> Result<NaiveTime, ScheduleError> {
        parse_time(&self.date_to)
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| ScheduleError::InvalidTime(value.to_string()))
}

/// A single itinerary entry record.
///
/// The authoritative copy is persisted and managed outside this crate. The
/// form view works on a [`ViewState`](crate::view::ViewState) copy and hands
/// a normalized `TripEvent` back to the caller on submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripEvent {
    /// Event type key ("taxi", "flight", ...). Kept open: unmapped types are
    /// accepted as-is and resolve to an empty offer catalog entry.
    pub event_type: String,
    pub destination: Option<Destination>,
    pub event_date: NaiveDate,
    pub schedule: EventSchedule,
    pub offers: Vec<Offer>,
    pub base_price: u64,
}
