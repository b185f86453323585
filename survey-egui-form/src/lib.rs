//! # survey-egui-form
//!
//! An egui form backend for Survey Pro that renders the feedback form as a
//! desktop window.
//!
//! This backend uses the `eframe` and `egui` crates. All fields are shown
//! at once; "Save" appends a record through the `RecordWriter` and shows
//! the result in a modal notice. Closing the window ends the session.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use survey_egui_form::EguiBackend;
//! use survey_record::{FormBackend, FormState, RecordWriter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let backend = EguiBackend::new().with_window_size([520.0, 800.0]);
//!     let session = backend.run(FormState::new(), RecordWriter::default())?;
//!     println!("{} record(s) saved", session.saved());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{EguiBackend, EguiError};
