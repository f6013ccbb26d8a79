//! Diary entries
//!
//! The diary is made of two books, that behave the same way: daily thoughts, and poems ("kavithai").
//! Each book holds at most one entry per day.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::date::DayKey;

/// Tells which book of the diary an entry belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiaryBook {
    /// Daily thoughts
    Thoughts,
    /// Poems
    Kavithai,
}

impl DiaryBook {
    pub const ALL: [DiaryBook; 2] = [DiaryBook::Thoughts, DiaryBook::Kavithai];
}

impl Display for DiaryBook {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            DiaryBook::Thoughts => write!(f, "Thought"),
            DiaryBook::Kavithai => write!(f, "Kavithai"),
        }
    }
}


/// A diary entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    date: DayKey,
    content: String,
}

impl DiaryEntry {
    pub fn new(date: DayKey, content: String) -> Self {
        Self { date, content }
    }

    pub fn date(&self) -> DayKey  { self.date     }
    pub fn content(&self) -> &str { &self.content }

    pub fn set_content(&mut self, new_content: String) {
        self.content = new_content;
    }
}
