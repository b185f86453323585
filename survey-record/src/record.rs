use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;

/// Format used for the record header timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Line that closes every record block.
pub const SEPARATOR: &str = "===================================";

/// Rendered in place of a rating when none is selected.
pub const NO_RATING: &str = "N/A";

/// Rendered in place of the technology list when nothing is ticked.
pub const NO_TECHNOLOGIES: &str = "Не обрано";

/// Project difficulty rating, one of five ordered labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    One,
    Two,
    Three,
    Four,
    #[default]
    Five,
}

impl Rating {
    /// All ratings in display order.
    pub const ALL: [Rating; 5] = [
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Rating::One => "1",
            Rating::Two => "2",
            Rating::Three => "3",
            Rating::Four => "4",
            Rating::Five => "5",
        }
    }

    /// Look a rating up by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Entry of the fixed technology catalog.
///
/// The derived ordering is catalog order, so a `BTreeSet<Technology>`
/// always iterates the way the record lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Technology {
    PythonQt,
    GitGitHub,
    UxUi,
}

impl Technology {
    /// The whole catalog in order.
    pub const ALL: [Technology; 3] = [
        Technology::PythonQt,
        Technology::GitGitHub,
        Technology::UxUi,
    ];

    /// Short label written into the record.
    pub fn label(self) -> &'static str {
        match self {
            Technology::PythonQt => "Python/Qt",
            Technology::GitGitHub => "Git/GitHub",
            Technology::UxUi => "UX/UI",
        }
    }

    /// Caption shown next to the checkbox.
    pub fn description(self) -> &'static str {
        match self {
            Technology::PythonQt => "Python 3 & PySide6 (Qt)",
            Technology::GitGitHub => "Система контролю версій Git",
            Technology::UxUi => "Принципи дизайну інтерфейсів",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One validated form submission, ready to be written.
///
/// Built by [`RecordWriter::submit`](crate::RecordWriter::submit) and
/// dropped right after it has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    pub name: String,
    pub age: u32,
    pub rating: Option<Rating>,
    pub technologies: BTreeSet<Technology>,
    pub comment: String,
    pub timestamp: NaiveDateTime,
}

impl SurveyRecord {
    /// Render the record as the multi-line text block stored in the file.
    pub fn render(&self) -> String {
        let rating = self.rating.map_or(NO_RATING, Rating::label);
        let technologies = if self.technologies.is_empty() {
            NO_TECHNOLOGIES.to_string()
        } else {
            self.technologies
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "--- Survey Record {} ---\n\
             Користувач: {}\n\
             Вік: {}\n\
             Оцінка складності: {}\n\
             Технологічний стек: {}\n\
             Відгук: {}\n\
             {}\n",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.name,
            self.age,
            rating,
            technologies,
            self.comment,
            SEPARATOR,
        )
    }
}
