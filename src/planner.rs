//! This module is the single entry point of a user interface into the records
//!
//! A [`Planner`] owns the [`RecordStore`], the [`Storage`] it is persisted into, and the [`Notifier`] the user is told about outcomes through.
//! Every mutation goes through it: after each accepted change, the touched collections are written and a success message is sent.
//! Rejected changes only produce an error message.

use std::error::Error;

use crate::date::DayKey;
use crate::task::TaskId;
use crate::diary::DiaryBook;
use crate::settings::Preferences;
use crate::notify::Notifier;
use crate::persist::{self, Collections};
use crate::storage::Storage;
use crate::store::{RecordStore, ValidationError};


pub struct Planner<S, N>
where
    S: Storage,
    N: Notifier,
{
    store: RecordStore,
    storage: S,
    notifier: N,
}

impl<S, N> Planner<S, N>
where
    S: Storage,
    N: Notifier,
{
    /// Load the records that `storage` contains (if any), and start managing them
    pub fn open(storage: S, notifier: N) -> Self {
        let store = persist::load(&storage);
        log::debug!("Opened a store with {} tasks and {} events", store.tasks().len(), store.events().len());
        Self { store, storage, notifier }
    }

    /// Returns the records, for display purposes
    pub fn store(&self) -> &RecordStore { &self.store }
    pub fn storage(&self) -> &S { &self.storage }
    pub fn notifier(&self) -> &N { &self.notifier }
    pub fn notifier_mut(&mut self) -> &mut N { &mut self.notifier }

    pub fn into_parts(self) -> (RecordStore, S, N) {
        (self.store, self.storage, self.notifier)
    }

    fn commit(&mut self, which: Collections, message: &str) {
        persist::save(&self.store, &mut self.storage, which);
        self.notifier.notify_success(message);
    }

    fn reject(&mut self, err: ValidationError) {
        log::debug!("Rejected a change: {:?}", err);
        self.notifier.notify_error(&err.to_string());
    }


    /// Add a task. Returns its id, or `None` in case it has been rejected
    pub fn add_task(&mut self, text: &str, due_date: Option<DayKey>) -> Option<TaskId> {
        match self.store.add_task(text, due_date) {
            Ok(task) => {
                let id = task.id();
                self.commit(Collections::TASKS, "Task added successfully!");
                Some(id)
            },
            Err(err) => {
                self.reject(err);
                None
            },
        }
    }

    /// Flip the completion status of a task. Unknown tasks are silently ignored
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let completed = self.store.toggle_task(id)?;
        let message = if completed { "Task marked completed." } else { "Task marked pending." };
        self.commit(Collections::TASKS, message);
        Some(completed)
    }

    /// Remove a task. Unknown tasks are silently ignored
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        match self.store.delete_task(id) {
            Some(_) => {
                self.commit(Collections::TASKS, "Task removed.");
                true
            },
            None => false,
        }
    }

    pub fn clear_completed_tasks(&mut self) -> usize {
        let n = self.store.clear_completed_tasks();
        self.commit(Collections::TASKS, "Completed tasks cleared.");
        n
    }

    pub fn clear_all_tasks(&mut self) -> usize {
        let n = self.store.clear_all_tasks();
        self.commit(Collections::TASKS, "All tasks have been cleared.");
        n
    }

    /// Save a note for a day of the calendar, and flag this day.
    ///
    /// The events and the selected days are two independent writes
    pub fn upsert_calendar_event(&mut self, date: DayKey, description: &str) -> bool {
        match self.store.upsert_calendar_event(date, description) {
            Ok(newly_selected) => {
                let mut which = Collections::EVENTS;
                if newly_selected {
                    which |= Collections::SELECTED_DATES;
                }
                let message = format!("Note saved for {}.", date.display_long());
                self.commit(which, &message);
                true
            },
            Err(err) => {
                self.reject(err);
                false
            },
        }
    }

    /// Save the entry of a diary book for the selected day
    pub fn upsert_diary_entry(&mut self, book: DiaryBook, date: Option<DayKey>, content: &str) -> bool {
        match self.store.upsert_diary_entry(book, date, content) {
            Ok(()) => {
                let message = format!("{} saved successfully!", book);
                self.commit(Collections::diary(book), &message);
                true
            },
            Err(err) => {
                self.reject(err);
                false
            },
        }
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.store.set_preferences(preferences);
        self.commit(Collections::PREFERENCES, "Settings saved.");
    }

    pub fn update_profile(&mut self, name: &str, email: &str) -> bool {
        match self.store.update_profile(name, email) {
            Ok(()) => {
                self.commit(Collections::PROFILE, "Profile updated.");
                true
            },
            Err(err) => {
                self.reject(err);
                false
            },
        }
    }

    /// Serialize every record, e.g. to back them up
    pub fn backup(&self) -> Result<String, Box<dyn Error>> {
        persist::export_snapshot(&self.store)
    }

    /// Replace every record with the content of a backup.
    ///
    /// In case the backup cannot be read, nothing is changed.
    pub fn restore(&mut self, snapshot: &str) -> Result<(), Box<dyn Error>> {
        match persist::import_snapshot(snapshot) {
            Ok(store) => {
                self.store = store;
                self.commit(Collections::all(), "Backup restored.");
                Ok(())
            },
            Err(err) => {
                self.notifier.notify_error(&format!("Unable to restore this backup: {}", err));
                Err(err)
            },
        }
    }
}
