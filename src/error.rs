use thiserror::Error;

/// Errors raised while loading or validating quiz part data. All of these
/// indicate broken source data and are reported at load/build time, never
/// during an active session.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read part file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse part file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("part {part_id} has no questions")]
    EmptyPart { part_id: u32 },

    #[error("question {question_id} has {count} option(s), need at least 2")]
    TooFewOptions { question_id: u32, count: usize },

    #[error(
        "question {question_id} has correct index {correct_index} but only {count} options"
    )]
    CorrectIndexOutOfRange {
        question_id: u32,
        correct_index: usize,
        count: usize,
    },
}
