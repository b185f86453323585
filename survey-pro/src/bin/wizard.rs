use anyhow::Context;
use log::info;
use survey_dialoguer_wizard::{DialoguerBackend, DialoguerError};
use survey_record::{FormBackend, FormState, RecordWriter, WriterConfig};

fn main() -> anyhow::Result<()> {
    survey_pro::init_logging();

    let writer = RecordWriter::new(WriterConfig::default());
    info!("survey records go to {}", writer.path().display());

    match DialoguerBackend::new().run(FormState::new(), writer) {
        Ok(session) => {
            info!("{} record(s) saved", session.saved());
            Ok(())
        }
        Err(DialoguerError::Cancelled) => {
            info!("survey cancelled");
            Ok(())
        }
        Err(err) => Err(err).context("survey wizard failed"),
    }
}
