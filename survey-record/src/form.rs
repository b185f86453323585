use std::collections::BTreeSet;

use crate::{Notice, Rating, RecordWriter, Technology};

/// Smallest age the age field accepts.
pub const MIN_AGE: u32 = 16;
/// Largest age the age field accepts.
pub const MAX_AGE: u32 = 100;
/// Age shown when the form opens.
pub const DEFAULT_AGE: u32 = 21;

/// Current values of the form fields, shared by every backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    age: u32,
    pub rating: Option<Rating>,
    pub technologies: BTreeSet<Technology>,
    pub comment: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    /// A fresh form: age 21, rating 5, nothing ticked, empty texts.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            age: DEFAULT_AGE,
            rating: Some(Rating::default()),
            technologies: BTreeSet::new(),
            comment: String::new(),
        }
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Set the age, clamped into `MIN_AGE..=MAX_AGE` like a spin box would.
    pub fn set_age(&mut self, age: u32) {
        self.age = age.clamp(MIN_AGE, MAX_AGE);
    }

    /// Tick or untick one technology.
    pub fn set_technology(&mut self, technology: Technology, checked: bool) {
        if checked {
            self.technologies.insert(technology);
        } else {
            self.technologies.remove(&technology);
        }
    }

    pub fn has_technology(&self, technology: Technology) -> bool {
        self.technologies.contains(&technology)
    }

    /// Submit the current values through `writer`.
    ///
    /// On success the name and comment are cleared. Age, rating and the
    /// technology checklist keep their values. On failure nothing changes.
    pub fn save(&mut self, writer: &RecordWriter) -> Notice {
        let result = writer.submit(
            &self.name,
            self.age,
            self.rating,
            &self.technologies,
            &self.comment,
        );

        if result.is_ok() {
            self.name.clear();
            self.comment.clear();
        }

        Notice::for_outcome(&result, writer.path())
    }
}
