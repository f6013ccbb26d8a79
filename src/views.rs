//! Derived views
//!
//! These are read-only projections of the records, recomputed on every call. They never modify their input.

use std::collections::BTreeSet;

use crate::date::DayKey;
use crate::task::Task;
use crate::event::CalendarEvent;
use crate::diary::DiaryEntry;


/// Tasks that are not completed yet, in their original order
pub fn pending(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| t.completed() == false)
        .collect()
}

/// Completed tasks, in their original order
pub fn completed(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| t.completed())
        .collect()
}

/// Tasks that have a due date, soonest first.
///
/// Tasks that are due the same day keep their original relative order.
pub fn by_due_date(tasks: &[Task]) -> Vec<&Task> {
    let mut dated: Vec<&Task> = tasks.iter()
        .filter(|t| t.due_date().is_some())
        .collect();
    // `sort_by_key` is stable
    dated.sort_by_key(|t| t.due_date());
    dated
}

/// Tasks that are due on a given day
pub fn due_on(tasks: &[Task], date: DayKey) -> Vec<&Task> {
    tasks.iter()
        .filter(|t| t.due_date() == Some(date))
        .collect()
}

/// Pending tasks whose due date is strictly before `today`, soonest first
pub fn overdue(tasks: &[Task], today: DayKey) -> Vec<&Task> {
    by_due_date(tasks).into_iter()
        .filter(|t| t.completed() == false)
        .filter(|t| matches!(t.due_date(), Some(due) if due < today))
        .collect()
}

/// The share of tasks that are completed, or `None` if there is no task at all
pub fn completion_ratio(tasks: &[Task]) -> Option<f64> {
    if tasks.is_empty() {
        return None;
    }
    Some(completed(tasks).len() as f64 / tasks.len() as f64)
}

/// The first event that is set for a given day
pub fn event_for<'a, I>(events: I, date: DayKey) -> Option<&'a CalendarEvent>
where
    I: IntoIterator<Item = &'a CalendarEvent>,
{
    events.into_iter().find(|ev| ev.date() == date)
}

/// The first diary entry written for a given day
pub fn entry_for<'a, I>(entries: I, date: DayKey) -> Option<&'a DiaryEntry>
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    entries.into_iter().find(|entry| entry.date() == date)
}

/// Whether a day is flagged on the calendar
pub fn is_selected(selected_dates: &BTreeSet<DayKey>, date: DayKey) -> bool {
    selected_dates.contains(&date)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn day(y: i32, m: u32, d: u32) -> DayKey {
        DayKey::from_ymd(y, m, d).unwrap()
    }

    fn task(id: i64, text: &str, completed: bool, due: Option<DayKey>) -> Task {
        Task::new_with_parameters(TaskId::from(id), text.to_string(), completed, due)
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn pending_and_completed() {
        let tasks = vec![
            task(3, "c", false, None),
            task(2, "b", true, None),
            task(1, "a", false, None),
        ];
        assert_eq!(texts(&pending(&tasks)), vec!["c", "a"]);
        assert_eq!(texts(&completed(&tasks)), vec!["b"]);
        assert_eq!(tasks.len(), 3);
    }

    #[test]
    fn due_date_order_is_stable() {
        let early = day(2024, 1, 5);
        let late = day(2024, 1, 10);
        let tasks = vec![
            task(5, "late 1", false, Some(late)),
            task(4, "undated", false, None),
            task(3, "early", true, Some(early)),
            task(2, "late 2", false, Some(late)),
            task(1, "late 3", false, Some(late)),
        ];
        assert_eq!(texts(&by_due_date(&tasks)), vec!["early", "late 1", "late 2", "late 3"]);
        assert_eq!(texts(&due_on(&tasks, late)), vec!["late 1", "late 2", "late 3"]);
    }

    #[test]
    fn overdue_tasks() {
        let today = day(2024, 1, 10);
        let tasks = vec![
            task(4, "due today", false, Some(today)),
            task(3, "late", false, Some(day(2024, 1, 9))),
            task(2, "late but done", true, Some(day(2024, 1, 1))),
            task(1, "very late", false, Some(day(2023, 12, 1))),
        ];
        assert_eq!(texts(&overdue(&tasks, today)), vec!["very late", "late"]);
    }

    #[test]
    fn ratio() {
        assert_eq!(completion_ratio(&[]), None);
        let tasks = vec![task(2, "b", true, None), task(1, "a", false, None)];
        assert_eq!(completion_ratio(&tasks), Some(0.5));
    }

    #[test]
    fn lookup_by_day() {
        let events = vec![
            CalendarEvent::new(day(2024, 3, 5), "Team sync".to_string()),
            CalendarEvent::new(day(2024, 3, 6), "Dentist".to_string()),
        ];
        assert_eq!(event_for(&events, day(2024, 3, 6)).map(|e| e.description()), Some("Dentist"));
        assert!(event_for(&events, day(2024, 3, 7)).is_none());

        let entries = vec![DiaryEntry::new(day(2024, 3, 5), "Felt good".to_string())];
        assert!(entry_for(&entries, day(2024, 3, 5)).is_some());
        assert!(entry_for(&entries, day(2024, 3, 4)).is_none());

        let selected: BTreeSet<DayKey> = vec![day(2024, 3, 5)].into_iter().collect();
        assert!(is_selected(&selected, day(2024, 3, 5)));
        assert!(is_selected(&selected, day(2024, 3, 6)) == false);
    }
}
