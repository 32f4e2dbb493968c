use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use super::{starts_at_or_after, EventStore, StoreError, StoreResult};
use crate::models::{Event, EventDetails, Privilege};

type Key = (String, NaiveDate);

/// Process-local store, used for tests and for running without a database.
#[derive(Default)]
pub struct MemoryEventStore {
    rows: Mutex<BTreeMap<Key, Event>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn rows(&self) -> MutexGuard<'_, BTreeMap<Key, Event>> {
        // A panic while holding the lock cannot leave a half-written row.
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn create(&self, event: &Event) -> StoreResult<()> {
        let mut rows = self.rows();
        let key = (event.name.clone(), event.date);
        if rows.contains_key(&key) {
            return Err(StoreError::DuplicateKey {
                name: event.name.clone(),
                date: event.date,
            });
        }
        rows.insert(key, event.clone());
        Ok(())
    }

    async fn get_all(&self) -> StoreResult<Vec<Event>> {
        let mut events: Vec<Event> = self.rows().values().cloned().collect();
        events.sort_by(|a, b| (a.date, a.time, &a.name).cmp(&(b.date, b.time, &b.name)));
        Ok(events)
    }

    async fn find(&self, name: &str, date: NaiveDate) -> StoreResult<Option<Event>> {
        Ok(self.rows().get(&(name.to_string(), date)).cloned())
    }

    async fn update(
        &self,
        name: &str,
        date: NaiveDate,
        details: &EventDetails,
    ) -> StoreResult<()> {
        match self.rows().get_mut(&(name.to_string(), date)) {
            Some(event) => {
                event.apply(details.clone());
                Ok(())
            }
            None => Err(StoreError::NotFound {
                name: name.to_string(),
                date,
            }),
        }
    }

    async fn delete(&self, name: &str, date: NaiveDate) -> StoreResult<()> {
        match self.rows().remove(&(name.to_string(), date)) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                name: name.to_string(),
                date,
            }),
        }
    }

    async fn query_from(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        max_privilege: Privilege,
    ) -> StoreResult<Vec<Event>> {
        let mut events: Vec<Event> = self
            .rows()
            .values()
            .filter(|event| starts_at_or_after(event, date, time))
            .filter(|event| event.event_type <= max_privilege.level())
            .cloned()
            .collect();
        events.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        Ok(events)
    }
}
