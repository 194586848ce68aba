use crate::error::CatalogError;
use crate::models::QuizPart;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory scanned for part files when none is given explicitly.
pub const PARTS_DIR: &str = "parts";

pub fn get_part_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    if dir.exists()
        && dir.is_dir()
        && let Ok(entries) = fs::read_dir(dir)
    {
        for entry in entries.flatten() {
            if let Some(ext) = entry.path().extension()
                && ext == "json"
            {
                files.push(entry.path());
            }
        }
    }

    files.sort();
    files
}

pub fn load_part(path: &Path) -> Result<QuizPart, CatalogError> {
    let content = fs::read_to_string(path)?;
    let part: QuizPart = serde_json::from_str(&content)?;
    validate_part(&part)?;
    Ok(part)
}

/// Checks the loaded-data invariants: a part must have questions, every
/// question needs at least two options, and the correct index must point
/// into the option list.
pub fn validate_part(part: &QuizPart) -> Result<(), CatalogError> {
    if part.questions.is_empty() {
        return Err(CatalogError::EmptyPart { part_id: part.id });
    }

    for question in &part.questions {
        if question.options.len() < 2 {
            return Err(CatalogError::TooFewOptions {
                question_id: question.id,
                count: question.options.len(),
            });
        }
        if question.correct_index >= question.options.len() {
            return Err(CatalogError::CorrectIndexOutOfRange {
                question_id: question.id,
                correct_index: question.correct_index,
                count: question.options.len(),
            });
        }
    }

    Ok(())
}

pub fn load_catalog_from(dir: &Path) -> Result<Vec<QuizPart>, CatalogError> {
    let mut parts = Vec::new();
    for path in get_part_files(dir) {
        parts.push(load_part(&path)?);
    }
    Ok(parts)
}

pub fn load_catalog() -> Result<Vec<QuizPart>, CatalogError> {
    load_catalog_from(Path::new(PARTS_DIR))
}
