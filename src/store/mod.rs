//! Persistence for the single `events` table.
//!
//! Every mutation is a single statement, so the primary key on `(name, date)`
//! is the only concurrency guard.

#[cfg(test)]
mod conformance;
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::{Event, EventDetails, Privilege};

pub use memory::MemoryEventStore;
pub use postgres::PgEventStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("event '{name}' on {date} already exists")]
    DuplicateKey { name: String, date: NaiveDate },

    #[error("event '{name}' on {date} not found")]
    NotFound { name: String, date: NaiveDate },

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fails with `DuplicateKey` when `(name, date)` is taken.
    async fn create(&self, event: &Event) -> StoreResult<()>;

    async fn get_all(&self) -> StoreResult<Vec<Event>>;

    async fn find(&self, name: &str, date: NaiveDate) -> StoreResult<Option<Event>>;

    /// Overwrites description, time and venue only.
    async fn update(&self, name: &str, date: NaiveDate, details: &EventDetails)
        -> StoreResult<()>;

    async fn delete(&self, name: &str, date: NaiveDate) -> StoreResult<()>;

    /// Events at or after `(date, time)` visible to `max_privilege`, earliest first.
    async fn query_from(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        max_privilege: Privilege,
    ) -> StoreResult<Vec<Event>>;
}

/// True when the event starts at or after the given moment.
pub(crate) fn starts_at_or_after(event: &Event, date: NaiveDate, time: NaiveTime) -> bool {
    event.date > date || (event.date == date && event.time >= time)
}
