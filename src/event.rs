//! Calendar events, i.e. notes attached to a special day

use serde::{Deserialize, Serialize};

use crate::date::DayKey;

/// A note attached to a calendar day. There is at most one event per day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    date: DayKey,
    description: String,
}

impl CalendarEvent {
    pub fn new(date: DayKey, description: String) -> Self {
        Self { date, description }
    }

    pub fn date(&self) -> DayKey {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, new_description: String) {
        self.description = new_description;
    }
}
