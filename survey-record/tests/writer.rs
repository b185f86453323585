//! Integration tests for the record writer

use std::collections::BTreeSet;
use std::fs;

use chrono::{NaiveDate, NaiveDateTime};
use survey_record::{FixedClock, Rating, RecordWriter, SubmitError, Technology, WriterConfig};

fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .unwrap()
        .and_hms_opt(15, 9, 26)
        .unwrap()
}

fn writer_in(dir: &tempfile::TempDir) -> RecordWriter {
    RecordWriter::new(WriterConfig::new().with_path(dir.path().join("survey_results.txt")))
        .with_clock(FixedClock(at()))
}

#[test]
fn test_scenario_record_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);

    writer
        .submit(
            "  Алекс Коваль  ",
            30,
            Some(Rating::Four),
            &BTreeSet::from([Technology::GitGitHub]),
            "Чудовий курс",
        )
        .unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert_eq!(
        written,
        "--- Survey Record 2025-03-14 15:09:26 ---\n\
         Користувач: Алекс Коваль\n\
         Вік: 30\n\
         Оцінка складності: 4\n\
         Технологічний стек: Git/GitHub\n\
         Відгук: Чудовий курс\n\
         ===================================\n"
    );
}

#[test]
fn test_empty_name_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);
    fs::write(writer.path(), "existing content\n").unwrap();

    for name in ["", "   ", "\t\n"] {
        let err = writer
            .submit(name, 25, Some(Rating::Five), &BTreeSet::new(), "")
            .unwrap_err();
        assert!(err.is_validation());
    }

    assert_eq!(fs::read(writer.path()).unwrap(), b"existing content\n");
}

#[test]
fn test_empty_name_does_not_create_file() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);

    let err = writer
        .submit("", 25, Some(Rating::Five), &BTreeSet::new(), "")
        .unwrap_err();

    assert!(matches!(err, SubmitError::Validation(_)));
    assert!(!writer.path().exists());
}

#[test]
fn test_existing_content_is_kept_as_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);
    let prefix = "--- earlier content ---\nрядок\n";
    fs::write(writer.path(), prefix).unwrap();

    writer
        .submit("Ірина", 44, Some(Rating::Two), &BTreeSet::new(), "")
        .unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert!(written.starts_with(prefix));
    let appended = &written[prefix.len()..];
    assert_eq!(appended.matches("--- Survey Record ").count(), 1);
    assert!(appended.ends_with("===================================\n"));
}

#[test]
fn test_identical_submissions_produce_identical_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);
    let technologies = BTreeSet::from([Technology::PythonQt, Technology::UxUi]);

    for _ in 0..2 {
        writer
            .submit("Марко", 19, Some(Rating::One), &technologies, " ok ")
            .unwrap();
    }

    let written = fs::read_to_string(writer.path()).unwrap();
    let (first, second) = written.split_at(written.len() / 2);
    assert_eq!(first, second);
    assert!(first.contains("Технологічний стек: Python/Qt, UX/UI\n"));
    assert!(first.contains("Відгук: ok\n"));
}

#[test]
fn test_missing_rating_and_technologies_use_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);

    writer.submit("Анна", 60, None, &BTreeSet::new(), "").unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert!(written.contains("\nОцінка складності: N/A\n"));
    assert!(written.contains("\nТехнологічний стек: Не обрано\n"));
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("missing").join("survey_results.txt");
    let writer = RecordWriter::new(WriterConfig::new().with_path(&target));

    let err = writer
        .submit("Олег", 33, Some(Rating::Three), &BTreeSet::new(), "")
        .unwrap_err();

    match &err {
        SubmitError::Io { path, source } => {
            assert_eq!(path, &target);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
    assert!(!target.exists());
}

#[test]
fn test_directory_target_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("survey_results.txt");
    fs::create_dir(&target).unwrap();
    let writer = RecordWriter::new(WriterConfig::new().with_path(&target));

    let err = writer
        .submit("Олег", 33, Some(Rating::Three), &BTreeSet::new(), "")
        .unwrap_err();

    assert!(err.io_error().is_some());
    assert!(target.is_dir());
    assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
}

#[test]
fn test_writer_does_not_validate_age_or_rating_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let writer = writer_in(&dir);

    writer
        .submit("Тест", 7, Some(Rating::Five), &BTreeSet::new(), "")
        .unwrap();

    let written = fs::read_to_string(writer.path()).unwrap();
    assert!(written.contains("\nВік: 7\n"));
}
