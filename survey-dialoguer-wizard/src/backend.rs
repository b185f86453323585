//! Dialoguer backend implementation for FormBackend trait.

use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input, MultiSelect, Select};
use log::debug;
use survey_record::{
    FormBackend, FormState, MAX_AGE, MIN_AGE, Notice, NoticeKind, Rating, RecordWriter, Session,
    Technology,
};
use thiserror::Error;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the survey (e.g., pressed Ctrl+C or Escape).
    #[error("Survey cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

/// Map a prompt failure, turning Ctrl+C / Escape into [`DialoguerError::Cancelled`].
fn prompt<T>(result: dialoguer::Result<T>) -> Result<T, DialoguerError> {
    result.map_err(|err| match err {
        dialoguer::Error::IO(ref io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => {
            DialoguerError::Cancelled
        }
        err => DialoguerError::Dialoguer(err),
    })
}

/// Dialoguer backend for interactive CLI prompts.
#[derive(Debug, Default, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Prompt every field once, starting from the current values.
    fn fill(&self, form: &mut FormState) -> Result<(), DialoguerError> {
        let theme = self.theme();

        // An empty name is let through so the writer reports it like the form does.
        form.name = prompt(
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt("1. Прізвище та ім'я користувача")
                .with_initial_text(form.name.clone())
                .allow_empty(true)
                .interact_text(),
        )?;

        let age = prompt(
            Input::<u32>::with_theme(theme.as_ref())
                .with_prompt(format!("2. Вкажіть ваш повний вік ({MIN_AGE}-{MAX_AGE})"))
                .default(form.age())
                .validate_with(|age: &u32| -> Result<(), String> {
                    if (MIN_AGE..=MAX_AGE).contains(age) {
                        Ok(())
                    } else {
                        Err(format!("Вік має бути від {MIN_AGE} до {MAX_AGE}"))
                    }
                })
                .interact_text(),
        )?;
        form.set_age(age);

        let labels: Vec<&str> = Rating::ALL.iter().map(|r| r.label()).collect();
        let current = form
            .rating
            .and_then(|r| Rating::ALL.iter().position(|&other| other == r))
            .unwrap_or(Rating::ALL.len() - 1);
        let chosen = prompt(
            Select::with_theme(theme.as_ref())
                .with_prompt("3. Оцініть складність проекту (1-5)")
                .items(&labels)
                .default(current)
                .interact(),
        )?;
        form.rating = Rating::ALL.get(chosen).copied();

        let captions: Vec<&str> = Technology::ALL.iter().map(|t| t.description()).collect();
        let ticked: Vec<bool> = Technology::ALL
            .iter()
            .map(|&t| form.has_technology(t))
            .collect();
        let selected = prompt(
            MultiSelect::with_theme(theme.as_ref())
                .with_prompt("4. Які технології ви вивчаєте?")
                .items(&captions)
                .defaults(&ticked)
                .interact(),
        )?;
        for (idx, technology) in Technology::ALL.into_iter().enumerate() {
            form.set_technology(technology, selected.contains(&idx));
        }

        form.comment = prompt(
            Input::<String>::with_theme(theme.as_ref())
                .with_prompt("5. Ваші додаткові пропозиції")
                .with_initial_text(form.comment.clone())
                .allow_empty(true)
                .interact_text(),
        )?;

        Ok(())
    }

    fn ask_again(&self) -> Result<bool, DialoguerError> {
        let theme = self.theme();
        prompt(
            Confirm::with_theme(theme.as_ref())
                .with_prompt("Заповнити ще одну анкету?")
                .default(true)
                .interact(),
        )
    }
}

fn print_notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => println!("{}: {}", notice.title, notice.message),
        NoticeKind::Error => eprintln!("{}: {}", notice.title, notice.message),
    }
}

impl FormBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn run(&self, mut form: FormState, writer: RecordWriter) -> Result<Session, Self::Error> {
        let mut notices = Vec::new();

        println!("Анкета зворотного зв'язку");
        println!();

        loop {
            self.fill(&mut form)?;

            let notice = form.save(&writer);
            print_notice(&notice);
            notices.push(notice);
            println!();

            if !self.ask_again()? {
                break;
            }
        }

        debug!("wizard finished after {} attempt(s)", notices.len());
        Ok(Session { form, notices })
    }
}
