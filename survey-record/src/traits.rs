use crate::{FormState, Notice, RecordWriter};

/// What a finished form session leaves behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Field values when the session ended.
    pub form: FormState,
    /// Every notice shown, oldest first.
    pub notices: Vec<Notice>,
}

impl Session {
    /// Number of records successfully written during the session.
    pub fn saved(&self) -> usize {
        self.notices.iter().filter(|n| n.is_success()).count()
    }
}

/// Trait for presentation backends that drive the form.
///
/// A backend renders the fields of a [`FormState`], lets the user edit them
/// and calls [`FormState::save`] whenever "Save" is activated, showing the
/// resulting [`Notice`]. It decides how to present the form (window,
/// terminal prompts, a script) and when the session is over.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Run one session starting from `form`, appending through `writer`.
    ///
    /// Save failures are not errors here: they become notices and the
    /// session continues. `Err` means the backend itself failed or the
    /// user cancelled.
    fn run(&self, form: FormState, writer: RecordWriter) -> Result<Session, Self::Error>;
}
