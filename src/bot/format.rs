use chrono::NaiveDate;

use crate::bot::args::{CREATE_USAGE, DELETE_USAGE, EDIT_USAGE};
use crate::models::Event;

pub const START_TEXT: &str = "Hi! I post what's on at the club. \
Send /upcoming for this week's events or /help for everything I can do.";

pub const ABOUT_TEXT: &str = "*About the club*\n\
We are the student computing society: talks, workshops, hack nights and \
contests all year round. Everyone is welcome.\n\n\
Use /schedule to see every upcoming event.";

pub const UNKNOWN_COMMAND_TEXT: &str =
    "Sorry, I don't understand that command. Send /help to see what I can do.";

pub const UNAUTHORIZED_TEXT: &str = "Sorry, only club admins can change the schedule.";

pub const PAST_DATE_TEXT: &str =
    "That date and time has already passed. Events can only be created in the future.";

pub const STORE_FAILURE_TEXT: &str = "Something went wrong on my side. Please try again later.";

pub const NOTHING_UPCOMING_TEXT: &str = "Nothing scheduled right now. Check back soon!";

/// Escapes the characters that legacy Telegram Markdown treats as markup.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn help_text() -> String {
    format!(
        "*Commands*\n\
         /upcoming - events in the next 7 days\n\
         /schedule - every upcoming event\n\
         /about - about the club\n\
         /help - this message\n\n\
         *Admins*\n\
         `{}`\n\
         `{}`\n\
         `{}`",
        CREATE_USAGE, EDIT_USAGE, DELETE_USAGE
    )
}

pub fn usage_text(usage: &str, problem: Option<&str>) -> String {
    match problem {
        Some(problem) => format!("{}.\nUsage: `{}`", escape_markdown(problem), usage),
        None => format!("Usage: `{}`", usage),
    }
}

/// User text is escaped and never placed inside an entity: legacy Markdown
/// rejects escapes between `*` markers.
pub fn event_text(event: &Event) -> String {
    let mut text = format!(
        "*{} at {}*\n{}\nVenue: {}",
        event.date.format("%a, %d %b %Y"),
        event.time.format("%I:%M %p"),
        escape_markdown(&event.name),
        escape_markdown(&event.venue),
    );
    if !event.description.is_empty() {
        text.push('\n');
        text.push_str(&escape_markdown(&event.description));
    }
    text
}

pub fn listing_text(title: &str, events: &[Event]) -> String {
    if events.is_empty() {
        return NOTHING_UPCOMING_TEXT.to_string();
    }
    let body: Vec<String> = events.iter().map(event_text).collect();
    format!("*{}*\n\n{}", title, body.join("\n\n"))
}

pub fn created_text(event: &Event) -> String {
    format!("*Created*\n\n{}", event_text(event))
}

fn event_line(label: &str, name: &str, date: NaiveDate, tail: &str) -> String {
    format!(
        "*{}* {} on {}{}",
        label,
        escape_markdown(name),
        date.format("%d/%m/%Y"),
        tail
    )
}

pub fn edited_text(name: &str, date: NaiveDate) -> String {
    event_line("Updated:", name, date, ".")
}

pub fn deleted_text(name: &str, date: NaiveDate) -> String {
    event_line("Deleted:", name, date, ".")
}

pub fn duplicate_text(name: &str, date: NaiveDate) -> String {
    event_line("Already exists:", name, date, ". Use /edit to change it.")
}

pub fn not_found_text(name: &str, date: NaiveDate) -> String {
    event_line("Not found:", name, date, ". Check the name and date.")
}
