//! # survey-record
//!
//! Core of Survey Pro, a small feedback form that appends each submission
//! to a plain-text file.
//!
//! - `SurveyRecord`, `Rating`, `Technology` - the data collected per submission
//! - `RecordWriter` and `WriterConfig` - validate, format and append a record
//! - `FormState` and `Notice` - field values and save feedback shared by backends
//! - `FormBackend` trait - implemented by the egui form and the terminal wizard
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::collections::BTreeSet;
//! use survey_record::{Rating, RecordWriter, Technology, WriterConfig};
//!
//! let writer = RecordWriter::new(WriterConfig::new().with_path("survey_results.txt"));
//! writer.submit(
//!     "Алекс Коваль",
//!     30,
//!     Some(Rating::Four),
//!     &BTreeSet::from([Technology::GitGitHub]),
//!     "Чудовий курс",
//! )?;
//! ```

mod record;
pub use record::{
    NO_RATING, NO_TECHNOLOGIES, Rating, SEPARATOR, SurveyRecord, TIMESTAMP_FORMAT, Technology,
};

mod error;
pub use error::{SubmitError, ValidationError};

mod clock;
pub use clock::{Clock, FixedClock, LocalClock};

mod writer;
pub use writer::{DEFAULT_RESULTS_FILE, RecordWriter, WriterConfig};

mod notice;
pub use notice::{Notice, NoticeKind};

mod form;
pub use form::{DEFAULT_AGE, FormState, MAX_AGE, MIN_AGE};

mod traits;
pub use traits::{FormBackend, Session};

// Test backend for driving the form without user interaction
mod test_backend;
pub use test_backend::{FormAction, TestBackend, TestBackendError};
