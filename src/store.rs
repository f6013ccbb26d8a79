//! The in-memory record store
//!
//! This holds every collection of the application (tasks, calendar events, selected days, diary books, preferences and profile),
//! and enforces their invariants: unique identity keys, and ordered day-keyed collections.
//! Every text typed by the user (task text, event description, diary content, profile fields) is stored without its surrounding whitespace.
//!
//! This module does not persist anything nor notify the user. See [`Planner`](crate::planner::Planner) for that.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

use crate::date::DayKey;
use crate::task::{Task, TaskId};
use crate::event::CalendarEvent;
use crate::diary::{DiaryBook, DiaryEntry};
use crate::settings::{self, Preferences, Profile};


/// A user input that has been rejected. Nothing is changed in the store when this happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTask,
    EmptyDescription,
    EmptyContent,
    NoDateSelected,
    EmptyName,
    InvalidEmail,
    /// Every task id has been used already
    NoTaskIdLeft,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        let msg = match self {
            ValidationError::EmptyTask => "Task cannot be empty.",
            ValidationError::EmptyDescription => "Event description cannot be empty.",
            ValidationError::EmptyContent => "Entry cannot be empty.",
            ValidationError::NoDateSelected => "Please select a date first.",
            ValidationError::EmptyName => "Name cannot be empty.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
            ValidationError::NoTaskIdLeft => "No more tasks can be added.",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for ValidationError {}


/// All the records of the application
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecordStore {
    /// Newest first
    tasks: Vec<Task>,
    last_task_id: Option<TaskId>,

    events: BTreeMap<DayKey, CalendarEvent>,
    selected_dates: BTreeSet<DayKey>,

    thoughts: BTreeMap<DayKey, DiaryEntry>,
    kavithai: BTreeMap<DayKey, DiaryEntry>,

    preferences: Preferences,
    profile: Profile,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing (e.g. stored) collections.
    ///
    /// In case several records share the same identity key, the last one wins.
    pub(crate) fn from_parts(
        tasks: Vec<Task>,
        events: Vec<CalendarEvent>,
        selected_dates: Vec<DayKey>,
        thoughts: Vec<DiaryEntry>,
        kavithai: Vec<DiaryEntry>,
        preferences: Preferences,
        profile: Profile,
    ) -> Self {
        let mut store = Self::new();

        for task in tasks {
            if let Some(pos) = store.tasks.iter().position(|t| t.id() == task.id()) {
                log::debug!("Duplicate task id {}, keeping the last one", task.id());
                store.tasks[pos] = task;
            } else {
                store.tasks.push(task);
            }
        }
        store.last_task_id = store.tasks.iter().map(|t| t.id()).max();

        store.events = events.into_iter().map(|ev| (ev.date(), ev)).collect();
        store.selected_dates = selected_dates.into_iter().collect();
        store.thoughts = thoughts.into_iter().map(|entry| (entry.date(), entry)).collect();
        store.kavithai = kavithai.into_iter().map(|entry| (entry.date(), entry)).collect();
        store.preferences = preferences;
        store.profile = profile;
        store
    }


    /// Returns the tasks, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Returns the calendar events, sorted by ascending date
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &CalendarEvent> + ExactSizeIterator {
        self.events.values()
    }

    pub fn event(&self, date: DayKey) -> Option<&CalendarEvent> {
        self.events.get(&date)
    }

    /// Returns the days that are flagged on the calendar
    pub fn selected_dates(&self) -> &BTreeSet<DayKey> {
        &self.selected_dates
    }

    /// Returns the entries of a diary book, most recent first
    pub fn diary(&self, book: DiaryBook) -> impl Iterator<Item = &DiaryEntry> + ExactSizeIterator {
        self.book(book).values().rev()
    }

    pub fn diary_entry(&self, book: DiaryBook, date: DayKey) -> Option<&DiaryEntry> {
        self.book(book).get(&date)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    fn book(&self, book: DiaryBook) -> &BTreeMap<DayKey, DiaryEntry> {
        match book {
            DiaryBook::Thoughts => &self.thoughts,
            DiaryBook::Kavithai => &self.kavithai,
        }
    }

    fn book_mut(&mut self, book: DiaryBook) -> &mut BTreeMap<DayKey, DiaryEntry> {
        match book {
            DiaryBook::Thoughts => &mut self.thoughts,
            DiaryBook::Kavithai => &mut self.kavithai,
        }
    }


    /// Add a new task, on top of the list
    pub fn add_task(&mut self, text: &str, due_date: Option<DayKey>) -> Result<&Task, ValidationError> {
        self.add_task_at(text, due_date, Utc::now())
    }

    /// Same as [`Self::add_task`], for a task created at a given time
    pub fn add_task_at(&mut self, text: &str, due_date: Option<DayKey>, now: DateTime<Utc>) -> Result<&Task, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTask);
        }

        let id = TaskId::next(now, self.last_task_id).ok_or(ValidationError::NoTaskIdLeft)?;
        self.last_task_id = Some(id);
        log::debug!("Adding task {} ({:?})", id, text);
        self.tasks.insert(0, Task::new(id, text.to_string(), due_date));
        Ok(&self.tasks[0])
    }

    /// Flip the completion status of a task.
    /// Returns its new status, or `None` (and does nothing) if there is no such task
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id() == id)?;
        let completed = task.toggle();
        log::debug!("Task {} is now {}", id, if completed { "completed" } else { "pending" });
        Some(completed)
    }

    /// Remove a task. Returns `None` (and does nothing) if there is no such task
    pub fn delete_task(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.tasks.iter().position(|t| t.id() == id)?;
        log::debug!("Deleting task {}", id);
        Some(self.tasks.remove(pos))
    }

    /// Remove every completed task, and return how many have been removed
    pub fn clear_completed_tasks(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.completed() == false);
        before - self.tasks.len()
    }

    /// Remove every task, and return how many have been removed.
    ///
    /// Ids that have been issued are still never reused.
    pub fn clear_all_tasks(&mut self) -> usize {
        let n = self.tasks.len();
        self.tasks.clear();
        n
    }

    /// Insert or replace the entry of a diary book for a given day
    pub fn upsert_diary_entry(&mut self, book: DiaryBook, date: Option<DayKey>, content: &str) -> Result<(), ValidationError> {
        let date = date.ok_or(ValidationError::NoDateSelected)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        let content = content.to_string();
        match self.book_mut(book).get_mut(&date) {
            Some(entry) => {
                log::debug!("Replacing {} for {}", book, date);
                entry.set_content(content);
            },
            None => {
                log::debug!("New {} for {}", book, date);
                self.book_mut(book).insert(date, DiaryEntry::new(date, content));
            },
        }
        Ok(())
    }

    /// Insert or replace the calendar event of a given day, and flag this day on the calendar.
    ///
    /// Returns whether the day has just been added to the selected days.
    pub fn upsert_calendar_event(&mut self, date: DayKey, description: &str) -> Result<bool, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let description = description.to_string();
        match self.events.get_mut(&date) {
            Some(event) => {
                log::debug!("Replacing event for {}", date);
                event.set_description(description);
            },
            None => {
                log::debug!("New event for {}", date);
                self.events.insert(date, CalendarEvent::new(date, description));
            },
        }
        Ok(self.selected_dates.insert(date))
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    pub fn update_profile(&mut self, name: &str, email: &str) -> Result<(), ValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if settings::is_valid_email(email) == false {
            return Err(ValidationError::InvalidEmail);
        }
        self.profile = Profile::new(name.to_string(), email.to_string());
        Ok(())
    }
}
