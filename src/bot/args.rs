//! Positional arguments for the mutating commands.
//!
//! Fields are separated by ` | `. Dates are `dd/mm/yyyy`, times are 12-hour
//! `hh:mm am/pm`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::models::{Event, EventDetails, Privilege};

pub const DELIMITER: &str = " | ";
pub const DATE_FORMAT: &str = "%d/%m/%Y";
pub const TIME_FORMAT: &str = "%I:%M %p";

pub const CREATE_USAGE: &str =
    "/create name | description | dd/mm/yyyy | hh:mm am/pm | venue [| visibility 0-3]";
pub const EDIT_USAGE: &str = "/edit name | dd/mm/yyyy | description | hh:mm am/pm | venue";
pub const DELETE_USAGE: &str = "/delete name | dd/mm/yyyy";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// No delimiter at all: the caller asked for the usage text.
    #[error("usage requested")]
    UsageRequested,

    #[error("expected {expected} fields, got {got}")]
    FieldCount { expected: &'static str, got: usize },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("'{0}' is not a date like 25/12/2024")]
    Date(String),

    #[error("'{0}' is not a time like 06:30 pm")]
    Time(String),

    #[error("'{0}' is not a visibility level between 0 and 3")]
    Visibility(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArgs {
    pub name: String,
    pub date: NaiveDate,
    pub details: EventDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    pub name: String,
    pub date: NaiveDate,
}

fn split_fields(args: &str) -> Result<Vec<&str>, ArgsError> {
    let fields: Vec<&str> = args.split(DELIMITER).map(str::trim).collect();
    if fields.len() == 1 {
        return Err(ArgsError::UsageRequested);
    }
    Ok(fields)
}

fn non_empty(field: &str, what: &'static str) -> Result<String, ArgsError> {
    if field.is_empty() {
        Err(ArgsError::Empty(what))
    } else {
        Ok(field.to_string())
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ArgsError> {
    // A two-digit year would silently land in the first century.
    let four_digit_year = raw
        .rsplit('/')
        .next()
        .map(|year| year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    if !four_digit_year {
        return Err(ArgsError::Date(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| ArgsError::Date(raw.to_string()))
}

pub fn parse_time(raw: &str) -> Result<NaiveTime, ArgsError> {
    NaiveTime::parse_from_str(&raw.to_uppercase(), TIME_FORMAT)
        .map_err(|_| ArgsError::Time(raw.to_string()))
}

fn parse_visibility(raw: &str) -> Result<i32, ArgsError> {
    raw.parse::<i32>()
        .ok()
        .and_then(Privilege::from_level)
        .map(Privilege::level)
        .ok_or_else(|| ArgsError::Visibility(raw.to_string()))
}

pub fn parse_create(args: &str) -> Result<Event, ArgsError> {
    let fields = split_fields(args)?;
    let (name, description, date, time, venue, visibility) = match fields.as_slice() {
        [name, description, date, time, venue] => (name, description, date, time, venue, None),
        [name, description, date, time, venue, visibility] => {
            (name, description, date, time, venue, Some(visibility))
        }
        _ => {
            return Err(ArgsError::FieldCount {
                expected: "5 or 6",
                got: fields.len(),
            })
        }
    };

    Ok(Event {
        name: non_empty(name, "name")?,
        description: description.to_string(),
        date: parse_date(date)?,
        time: parse_time(time)?,
        venue: venue.to_string(),
        event_type: match visibility {
            Some(raw) => parse_visibility(raw)?,
            None => Privilege::Public.level(),
        },
    })
}

pub fn parse_edit(args: &str) -> Result<EditArgs, ArgsError> {
    let fields = split_fields(args)?;
    let [name, date, description, time, venue] = fields.as_slice() else {
        return Err(ArgsError::FieldCount {
            expected: "5",
            got: fields.len(),
        });
    };

    Ok(EditArgs {
        name: non_empty(name, "name")?,
        date: parse_date(date)?,
        details: EventDetails {
            description: description.to_string(),
            time: parse_time(time)?,
            venue: venue.to_string(),
        },
    })
}

pub fn parse_delete(args: &str) -> Result<DeleteArgs, ArgsError> {
    let fields = split_fields(args)?;
    let [name, date] = fields.as_slice() else {
        return Err(ArgsError::FieldCount {
            expected: "2",
            got: fields.len(),
        });
    };

    Ok(DeleteArgs {
        name: non_empty(name, "name")?,
        date: parse_date(date)?,
    })
}

/// Strictly before `now`: an earlier day, or the same day at an earlier time.
pub fn is_past(date: NaiveDate, time: NaiveTime, now: NaiveDateTime) -> bool {
    date < now.date() || (date == now.date() && time < now.time())
}
