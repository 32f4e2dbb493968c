//! Behaviour every `EventStore` must share. Each check starts from an empty
//! store and is run against both implementations.

use chrono::{NaiveDate, NaiveTime};

use super::{EventStore, StoreError};
use crate::models::{Event, EventDetails, Privilege};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn event(name: &str, on: NaiveDate, at: NaiveTime, event_type: i32) -> Event {
    Event {
        name: name.to_string(),
        date: on,
        description: format!("{} description", name),
        time: at,
        venue: "Main hall".to_string(),
        event_type,
    }
}

async fn names_from(
    store: &dyn EventStore,
    on: NaiveDate,
    at: NaiveTime,
    privilege: Privilege,
) -> Vec<String> {
    store
        .query_from(on, at, privilege)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect()
}

pub async fn create_then_find_preserves_fields(store: &dyn EventStore) {
    let talk = event("Talk", date(2024, 1, 10), time(18, 30), 1);

    store.create(&talk).await.unwrap();

    let found = store.find("Talk", date(2024, 1, 10)).await.unwrap();
    assert_eq!(found, Some(talk.clone()));
    assert_eq!(store.get_all().await.unwrap(), vec![talk]);
    assert_eq!(store.find("Talk", date(2024, 1, 11)).await.unwrap(), None);
}

pub async fn duplicate_create_keeps_first_row(store: &dyn EventStore) {
    let first = event("Talk", date(2024, 1, 10), time(18, 30), 0);
    let mut second = first.clone();
    second.venue = "Elsewhere".to_string();

    store.create(&first).await.unwrap();
    let err = store.create(&second).await.unwrap_err();

    assert!(matches!(err, StoreError::DuplicateKey { .. }), "{:?}", err);
    assert_eq!(store.get_all().await.unwrap(), vec![first]);
}

pub async fn same_name_on_another_date_is_allowed(store: &dyn EventStore) {
    let first = event("Meetup", date(2024, 1, 10), time(18, 0), 0);
    let second = event("Meetup", date(2024, 1, 17), time(18, 0), 0);

    store.create(&first).await.unwrap();
    store.create(&second).await.unwrap();

    assert_eq!(store.get_all().await.unwrap(), vec![first, second]);
}

pub async fn update_changes_only_details(store: &dyn EventStore) {
    store
        .create(&event("Talk", date(2024, 1, 10), time(18, 30), 2))
        .await
        .unwrap();

    let details = EventDetails {
        description: "Moved".to_string(),
        time: time(19, 0),
        venue: "Room 101".to_string(),
    };
    store.update("Talk", date(2024, 1, 10), &details).await.unwrap();

    let updated = store.find("Talk", date(2024, 1, 10)).await.unwrap().unwrap();
    assert_eq!(updated.name, "Talk");
    assert_eq!(updated.date, date(2024, 1, 10));
    assert_eq!(updated.event_type, 2);
    assert_eq!(updated.description, "Moved");
    assert_eq!(updated.time, time(19, 0));
    assert_eq!(updated.venue, "Room 101");
}

pub async fn missing_rows_report_not_found(store: &dyn EventStore) {
    let details = EventDetails {
        description: "x".to_string(),
        time: time(9, 0),
        venue: "y".to_string(),
    };
    let err = store
        .update("Ghost", date(2024, 1, 10), &details)
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }), "{:?}", err);
    assert!(store.get_all().await.unwrap().is_empty());

    let kept = event("Talk", date(2024, 1, 11), time(18, 30), 0);
    store
        .create(&event("Talk", date(2024, 1, 10), time(18, 30), 0))
        .await
        .unwrap();
    store.create(&kept).await.unwrap();

    store.delete("Talk", date(2024, 1, 10)).await.unwrap();
    let err = store.delete("Talk", date(2024, 1, 10)).await.unwrap_err();

    assert!(matches!(err, StoreError::NotFound { .. }), "{:?}", err);
    assert_eq!(store.get_all().await.unwrap(), vec![kept]);
}

pub async fn query_from_is_inclusive_on_same_day_time(store: &dyn EventStore) {
    for (name, on, at) in [
        ("Early", date(2024, 1, 10), time(8, 59)),
        ("OnTime", date(2024, 1, 10), time(9, 0)),
        ("Tomorrow", date(2024, 1, 11), time(0, 0)),
        ("Yesterday", date(2024, 1, 9), time(23, 0)),
    ] {
        store.create(&event(name, on, at, 0)).await.unwrap();
    }

    let names = names_from(store, date(2024, 1, 10), time(9, 0), Privilege::Public).await;
    assert_eq!(names, vec!["OnTime", "Tomorrow"]);
}

pub async fn query_from_filters_by_privilege(store: &dyn EventStore) {
    store
        .create(&event("Board", date(2024, 2, 1), time(17, 0), 2))
        .await
        .unwrap();

    let from = date(2024, 1, 10);
    assert!(names_from(store, from, time(9, 0), Privilege::Member).await.is_empty());
    assert_eq!(names_from(store, from, time(9, 0), Privilege::Core).await, vec!["Board"]);
    assert_eq!(names_from(store, from, time(9, 0), Privilege::Admin).await, vec!["Board"]);
}

pub async fn query_from_orders_by_date_then_time(store: &dyn EventStore) {
    for (name, on, at) in [
        ("C", date(2024, 1, 12), time(8, 0)),
        ("B", date(2024, 1, 11), time(20, 0)),
        ("A", date(2024, 1, 11), time(10, 0)),
    ] {
        store.create(&event(name, on, at, 0)).await.unwrap();
    }

    let names = names_from(store, date(2024, 1, 10), time(0, 0), Privilege::Public).await;
    assert_eq!(names, vec!["A", "B", "C"]);
}
