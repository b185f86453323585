//! Test backend for driving the form without user interaction.
//!
//! `TestBackend` replays a fixed list of [`FormAction`]s against a
//! [`FormState`], the way a user would click through the window.
//!
//! # Example
//!
//! ```rust
//! use survey_record::{FormBackend, FormState, Rating, RecordWriter, TestBackend, WriterConfig};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let writer = RecordWriter::new(WriterConfig::new().with_path(dir.path().join("results.txt")));
//!
//! let session = TestBackend::new()
//!     .with_name("Олена")
//!     .with_rating(Rating::Three)
//!     .save()
//!     .run(FormState::new(), writer)
//!     .unwrap();
//!
//! assert_eq!(session.saved(), 1);
//! assert_eq!(session.form.name, "");
//! ```

use crate::{FormBackend, FormState, Rating, RecordWriter, Session, Technology};

/// One user interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetName(String),
    SetAge(u32),
    SelectRating(Option<Rating>),
    SetTechnology(Technology, bool),
    SetComment(String),
    /// Click "Save".
    Save,
}

/// Error type for TestBackend.
#[derive(Debug, thiserror::Error)]
pub enum TestBackendError {
    #[error("Script contains no save action")]
    NothingToSave,
}

/// A backend that replays pre-configured actions.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    actions: Vec<FormAction>,
}

impl TestBackend {
    /// Create a new empty test backend.
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Append an action to the script.
    pub fn with_action(mut self, action: FormAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with_action(FormAction::SetName(name.into()))
    }

    pub fn with_age(self, age: u32) -> Self {
        self.with_action(FormAction::SetAge(age))
    }

    pub fn with_rating(self, rating: Rating) -> Self {
        self.with_action(FormAction::SelectRating(Some(rating)))
    }

    /// Leave every rating unselected.
    pub fn without_rating(self) -> Self {
        self.with_action(FormAction::SelectRating(None))
    }

    pub fn with_technology(self, technology: Technology) -> Self {
        self.with_action(FormAction::SetTechnology(technology, true))
    }

    pub fn without_technology(self, technology: Technology) -> Self {
        self.with_action(FormAction::SetTechnology(technology, false))
    }

    pub fn with_comment(self, comment: impl Into<String>) -> Self {
        self.with_action(FormAction::SetComment(comment.into()))
    }

    /// Click "Save".
    pub fn save(self) -> Self {
        self.with_action(FormAction::Save)
    }
}

impl FormBackend for TestBackend {
    type Error = TestBackendError;

    fn run(&self, mut form: FormState, writer: RecordWriter) -> Result<Session, Self::Error> {
        if !self.actions.contains(&FormAction::Save) {
            return Err(TestBackendError::NothingToSave);
        }

        let mut notices = Vec::new();
        for action in &self.actions {
            match action {
                FormAction::SetName(name) => form.name = name.clone(),
                FormAction::SetAge(age) => form.set_age(*age),
                FormAction::SelectRating(rating) => form.rating = *rating,
                FormAction::SetTechnology(technology, checked) => {
                    form.set_technology(*technology, *checked)
                }
                FormAction::SetComment(comment) => form.comment = comment.clone(),
                FormAction::Save => notices.push(form.save(&writer)),
            }
        }

        Ok(Session { form, notices })
    }
}
