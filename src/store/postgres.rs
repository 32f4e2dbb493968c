use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;

use super::{EventStore, StoreError, StoreResult};
use crate::models::{Event, EventDetails, Privilege};

#[derive(Clone)]
pub struct PgEventStore {
    pool: PgPool,
}

impl PgEventStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn create(&self, event: &Event) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO events (name, date, description, time, venue, event_type)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (name, date) DO NOTHING
            "#,
        )
        .bind(&event.name)
        .bind(event.date)
        .bind(&event.description)
        .bind(event.time)
        .bind(&event.venue)
        .bind(event.event_type)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::DuplicateKey {
                name: event.name.clone(),
                date: event.date,
            });
        }
        Ok(())
    }

    async fn get_all(&self) -> StoreResult<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT name, date, description, time, venue, event_type
            FROM events
            ORDER BY date, time, name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    async fn find(&self, name: &str, date: NaiveDate) -> StoreResult<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT name, date, description, time, venue, event_type
            FROM events
            WHERE name = $1 AND date = $2
            "#,
        )
        .bind(name)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn update(
        &self,
        name: &str,
        date: NaiveDate,
        details: &EventDetails,
    ) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET description = $3, time = $4, venue = $5
            WHERE name = $1 AND date = $2
            "#,
        )
        .bind(name)
        .bind(date)
        .bind(&details.description)
        .bind(details.time)
        .bind(&details.venue)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                name: name.to_string(),
                date,
            });
        }
        Ok(())
    }

    async fn delete(&self, name: &str, date: NaiveDate) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE name = $1 AND date = $2")
            .bind(name)
            .bind(date)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                name: name.to_string(),
                date,
            });
        }
        Ok(())
    }

    async fn query_from(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        max_privilege: Privilege,
    ) -> StoreResult<Vec<Event>> {
        // Strict on date, inclusive on time within the same day.
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT name, date, description, time, venue, event_type
            FROM events
            WHERE (date > $1 OR (date = $1 AND time >= $2))
              AND event_type <= $3
            ORDER BY date, time
            "#,
        )
        .bind(date)
        .bind(time)
        .bind(max_privilege.level())
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
