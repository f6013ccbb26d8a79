//! Conversion between a [`RecordStore`] and a [`Storage`]
//!
//! Every collection lives under its own key, as a JSON string. Date fields are written as ISO-8601 strings,
//! and are turned back into [`DayKey`]s when they are loaded.

use std::error::Error;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::date::DayKey;
use crate::task::Task;
use crate::event::CalendarEvent;
use crate::diary::{DiaryBook, DiaryEntry};
use crate::settings::{Preferences, Profile};
use crate::storage::Storage;
use crate::store::RecordStore;

pub const TASKS_KEY: &str = "tasks";
pub const SELECTED_DATES_KEY: &str = "selectedDates";
pub const EVENTS_KEY: &str = "events";
pub const THOUGHTS_KEY: &str = "diaryEntries";
pub const KAVITHAI_KEY: &str = "poems";
pub const PREFERENCES_KEY: &str = "preferences";
pub const PROFILE_KEY: &str = "profile";

bitflags! {
    /// A set of collections, used to tell which ones should be written
    pub struct Collections: u8 {
        const TASKS = 1;
        const SELECTED_DATES = 2;
        const EVENTS = 4;
        const THOUGHTS = 8;
        const KAVITHAI = 16;
        const PREFERENCES = 32;
        const PROFILE = 64;
    }
}

impl Collections {
    pub fn diary(book: DiaryBook) -> Self {
        match book {
            DiaryBook::Thoughts => Self::THOUGHTS,
            DiaryBook::Kavithai => Self::KAVITHAI,
        }
    }
}


/// Write the given collections of `store` into `storage`.
///
/// Each collection is an independent write: there is no atomicity between them.
pub fn save<S: Storage>(store: &RecordStore, storage: &mut S, which: Collections) {
    if which.contains(Collections::TASKS) {
        write_key(storage, TASKS_KEY, store.tasks());
    }
    if which.contains(Collections::SELECTED_DATES) {
        write_key(storage, SELECTED_DATES_KEY, store.selected_dates());
    }
    if which.contains(Collections::EVENTS) {
        let events: Vec<&CalendarEvent> = store.events().collect();
        write_key(storage, EVENTS_KEY, &events);
    }
    if which.contains(Collections::THOUGHTS) {
        let entries: Vec<&DiaryEntry> = store.diary(DiaryBook::Thoughts).collect();
        write_key(storage, THOUGHTS_KEY, &entries);
    }
    if which.contains(Collections::KAVITHAI) {
        let entries: Vec<&DiaryEntry> = store.diary(DiaryBook::Kavithai).collect();
        write_key(storage, KAVITHAI_KEY, &entries);
    }
    if which.contains(Collections::PREFERENCES) {
        write_key(storage, PREFERENCES_KEY, store.preferences());
    }
    if which.contains(Collections::PROFILE) {
        write_key(storage, PROFILE_KEY, store.profile());
    }
}

fn write_key<S: Storage, T: Serialize + ?Sized>(storage: &mut S, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => storage.set(key, json),
        Err(err) => log::warn!("Unable to serialize {}: {}", key, err),
    }
}


/// Read every collection from `storage`.
///
/// Missing keys result in empty collections. Keys that cannot be parsed are logged and skipped, without affecting the other ones.
/// Inside a collection, records that cannot be parsed are logged and skipped as well, and the other records are kept.
pub fn load<S: Storage>(storage: &S) -> RecordStore {
    RecordStore::from_parts(
        read_array_lenient(storage, TASKS_KEY),
        read_array_lenient(storage, EVENTS_KEY),
        read_array_lenient(storage, SELECTED_DATES_KEY),
        read_array_lenient(storage, THOUGHTS_KEY),
        read_array_lenient(storage, KAVITHAI_KEY),
        read_key_or_default(storage, PREFERENCES_KEY),
        read_key_or_default(storage, PROFILE_KEY),
    )
}

/// Same as [`load`], but fails at the first key that cannot be parsed
pub fn try_load<S: Storage>(storage: &S) -> Result<RecordStore, Box<dyn Error>> {
    Ok(RecordStore::from_parts(
        read_key(storage, TASKS_KEY)?.unwrap_or_default(),
        read_key(storage, EVENTS_KEY)?.unwrap_or_default(),
        read_key(storage, SELECTED_DATES_KEY)?.unwrap_or_default(),
        read_key(storage, THOUGHTS_KEY)?.unwrap_or_default(),
        read_key(storage, KAVITHAI_KEY)?.unwrap_or_default(),
        read_key(storage, PREFERENCES_KEY)?.unwrap_or_default(),
        read_key(storage, PROFILE_KEY)?.unwrap_or_default(),
    ))
}

fn read_key<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Result<Option<T>, Box<dyn Error>> {
    match storage.get(key) {
        None => Ok(None),
        Some(json) => match serde_json::from_str(&json) {
            Ok(value) => Ok(Some(value)),
            Err(err) => Err(format!("Invalid content for key {:?}: {}", key, err).into()),
        },
    }
}

fn read_key_or_default<S: Storage, T: DeserializeOwned + Default>(storage: &S, key: &str) -> T {
    match read_key(storage, key) {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            log::warn!("{}. Using a default value", err);
            T::default()
        },
    }
}

fn read_array_lenient<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = read_key_or_default(storage, key);
    values.into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("Skipping record #{} of key {:?}: {}", index, key, err);
                None
            },
        })
        .collect()
}


/// Every collection at once, as used for backups
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Snapshot {
    tasks: Vec<Task>,
    selected_dates: Vec<DayKey>,
    events: Vec<CalendarEvent>,
    diary_entries: Vec<DiaryEntry>,
    poems: Vec<DiaryEntry>,
    preferences: Preferences,
    profile: Profile,
}

/// Serialize the whole store into a single JSON document, e.g. to back it up
pub fn export_snapshot(store: &RecordStore) -> Result<String, Box<dyn Error>> {
    let snapshot = Snapshot {
        tasks: store.tasks().to_vec(),
        selected_dates: store.selected_dates().iter().cloned().collect(),
        events: store.events().cloned().collect(),
        diary_entries: store.diary(DiaryBook::Thoughts).cloned().collect(),
        poems: store.diary(DiaryBook::Kavithai).cloned().collect(),
        preferences: store.preferences().clone(),
        profile: store.profile().clone(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Read back a document produced by [`export_snapshot`]. Missing collections are empty.
pub fn import_snapshot(json: &str) -> Result<RecordStore, Box<dyn Error>> {
    let snapshot: Snapshot = serde_json::from_str(json)?;
    Ok(RecordStore::from_parts(
        snapshot.tasks,
        snapshot.events,
        snapshot.selected_dates,
        snapshot.diary_entries,
        snapshot.poems,
        snapshot.preferences,
        snapshot.profile,
    ))
}
