use anyhow::Context;
use log::info;
use survey_egui_form::EguiBackend;
use survey_record::{FormBackend, FormState, RecordWriter, WriterConfig};

fn main() -> anyhow::Result<()> {
    survey_pro::init_logging();

    let writer = RecordWriter::new(WriterConfig::default());
    info!("survey records go to {}", writer.path().display());

    let session = EguiBackend::new()
        .run(FormState::new(), writer)
        .context("survey window failed")?;

    info!("{} record(s) saved", session.saved());
    Ok(())
}
