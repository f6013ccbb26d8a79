//! Some utility functions

use crate::store::RecordStore;
use crate::diary::DiaryBook;

/// Initialize the logger. The level is read from the `RUST_LOG` environment variable.
///
/// Calling this several times is harmless.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}

/// A debug utility that pretty-prints a store
pub fn print_store(store: &RecordStore) {
    println!("TASKS");
    for task in store.tasks() {
        let completion = if task.completed() { "✓" } else { " " };
        let due = match task.due_date() {
            Some(date) => format!(" (due {})", date.display_long()),
            None => String::new(),
        };
        println!("    {} {}{}\t{}", completion, task.text(), due, task.id());
    }

    println!("EVENTS");
    for event in store.events() {
        println!("    {}\t{}", event.date(), event.description());
    }

    for book in DiaryBook::ALL.iter() {
        println!("DIARY ({})", book);
        for entry in store.diary(*book) {
            println!("    {}\t{}", entry.date(), entry.content());
        }
    }
}
