//! This crate provides the data core of a personal organizer: a to-do list, a calendar with notes for special days, and a diary.
//!
//! The records live in a [`RecordStore`](store::RecordStore), which enforces their invariants.
//! Read-only projections (pending tasks, tasks by due date, the event of a given day...) are computed by the functions of the [`views`] module.
//!
//! Records are persisted into a key-value [`Storage`](storage::Storage), one key per collection, by the [`persist`] module. \
//! A [`Planner`] ties a store, a storage and a [`Notifier`](notify::Notifier) together. This is what a user interface is expected to use:
//! every change goes through it, is written to the storage and reported to the user.

pub mod date;
pub use date::DayKey;
mod task;
pub use task::{Task, TaskId};
mod event;
pub use event::CalendarEvent;
mod diary;
pub use diary::{DiaryBook, DiaryEntry};
pub mod settings;

pub mod store;
pub use store::{RecordStore, ValidationError};
pub mod views;

pub mod storage;
pub mod notify;
pub mod persist;
pub mod planner;
pub use planner::Planner;

pub mod config;
pub mod utils;
