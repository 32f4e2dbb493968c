use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use sqlx::FromRow;

/// A row of the `events` table. `(name, date)` is the primary key.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
    pub time: NaiveTime,
    pub venue: String,
    /// Lowest privilege tier allowed to see the event from the bot.
    pub event_type: i32,
}

/// The mutable part of an event. Name and date never change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub description: String,
    pub time: NaiveTime,
    pub venue: String,
}

impl Event {
    pub fn apply(&mut self, details: EventDetails) {
        self.description = details.description;
        self.time = details.time;
        self.venue = details.venue;
    }
}

/// Wire shape used by the management API listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    pub event_name: String,
    pub event_desc: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub event_type: i32,
}

impl From<Event> for EventView {
    fn from(event: Event) -> Self {
        Self {
            event_name: event.name,
            event_desc: event.description,
            date: event.date.format("%Y-%m-%d").to_string(),
            time: event.time.format("%H:%M:%S").to_string(),
            venue: event.venue,
            event_type: event.event_type,
        }
    }
}
