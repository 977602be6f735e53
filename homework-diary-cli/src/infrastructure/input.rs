use std::path::Path;

use homework_diary_core::HomeworkEntry;

use super::error::{CliError, Result};

/// Read a JSON array of homework entries
pub fn load_entries(path: &Path) -> Result<Vec<HomeworkEntry>> {
    if !path.is_file() {
        return Err(CliError::input_not_found(path.to_path_buf()));
    }

    let data = std::fs::read(path)?;
    let entries: Vec<HomeworkEntry> = serde_json::from_slice(&data)?;

    tracing::info!(path = %path.display(), count = entries.len(), "loaded homework entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("homework.json");
        std::fs::write(
            &path,
            r#"[{"class":"10th","date":"2024-06-12","subjectName":"English","activityType":"Reading","description":"1,2"}]"#,
        )
        .unwrap();

        let entries = load_entries(&path).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject_name, "English");
    }

    #[test]
    fn test_missing_file() {
        let err = load_entries(Path::new("/nonexistent/homework.json")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("homework.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_entries(&path).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
