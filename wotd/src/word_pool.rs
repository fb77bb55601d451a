use chrono::NaiveDate;
use indexmap::IndexSet;
use thiserror::Error;

use crate::day_selector::select_index;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no words to choose from: both the default and the custom word lists are empty")]
pub struct EmptyPoolError;

/// Candidate words in first-seen order. Never empty.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: IndexSet<String>,
}

impl WordPool {
    /// Default words come first, then custom ones; exact duplicates are dropped.
    pub fn merge<D, C>(default_words: D, custom_words: C) -> Result<Self, EmptyPoolError>
    where
        D: IntoIterator<Item = String>,
        C: IntoIterator<Item = String>,
    {
        let words: IndexSet<String> = default_words.into_iter().chain(custom_words).collect();
        if words.is_empty() {
            return Err(EmptyPoolError);
        }
        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn pick(&self, date: NaiveDate) -> &str {
        let index = select_index(date, self.len());
        &self.words[index]
    }
}
