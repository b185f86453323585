//! # survey-dialoguer-wizard
//!
//! Dialoguer wizard backend for Survey Pro.
//!
//! Fills in the feedback form from the terminal: every field is prompted in
//! order, pre-filled with the current form values, then the record is saved
//! and the result printed. The wizard repeats until the user declines to
//! fill in another form.
//!
//! ## Example
//!
//! ```rust,ignore
//! use survey_dialoguer_wizard::DialoguerBackend;
//! use survey_record::{FormBackend, FormState, RecordWriter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let session = DialoguerBackend::new().run(FormState::new(), RecordWriter::default())?;
//!     println!("{} record(s) saved", session.saved());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError};
