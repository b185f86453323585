use std::path::Path;

use crate::SubmitError;

/// Whether a notice reports success or a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message a backend shows to the user after "Save".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    /// Build the notice for the outcome of a save against `path`.
    pub fn for_outcome(result: &Result<(), SubmitError>, path: &Path) -> Self {
        match result {
            Ok(()) => Self::saved(path),
            Err(SubmitError::Validation(_)) => Self {
                kind: NoticeKind::Error,
                title: "Помилка".to_string(),
                message: "Будь ласка, введіть Прізвище та Ім'я!".to_string(),
            },
            Err(SubmitError::Io { source, .. }) => Self {
                kind: NoticeKind::Error,
                title: "Помилка файлової системи".to_string(),
                message: format!("Не вдалося зберегти файл: {source}"),
            },
        }
    }

    fn saved(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        Self {
            kind: NoticeKind::Success,
            title: "Успіх".to_string(),
            message: format!("Дані успішно записано у файл '{file_name}'"),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use std::path::PathBuf;

    #[test]
    fn success_names_the_file() {
        let notice = Notice::for_outcome(&Ok(()), Path::new("data/survey_results.txt"));
        assert!(notice.is_success());
        assert_eq!(notice.title, "Успіх");
        assert_eq!(
            notice.message,
            "Дані успішно записано у файл 'survey_results.txt'"
        );
    }

    #[test]
    fn validation_failure_asks_for_name() {
        let result = Err(SubmitError::from(ValidationError::NameRequired));
        let notice = Notice::for_outcome(&result, Path::new("survey_results.txt"));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Помилка");
        assert_eq!(notice.message, "Будь ласка, введіть Прізвище та Ім'я!");
    }

    #[test]
    fn io_failure_carries_native_message() {
        let result = Err(SubmitError::Io {
            path: PathBuf::from("survey_results.txt"),
            source: std::io::Error::other("disk full"),
        });
        let notice = Notice::for_outcome(&result, Path::new("survey_results.txt"));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.title, "Помилка файлової системи");
        assert_eq!(notice.message, "Не вдалося зберегти файл: disk full");
    }
}
