pub mod catalog;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use catalog::{get_part_files, load_catalog, load_catalog_from, load_part, validate_part};
pub use error::CatalogError;
pub use models::{AppState, Question, QuizPart};
pub use session::{QuizSession, handle_quiz_input};
pub use ui::{draw_home, draw_quiz, draw_result};
pub use utils::truncate_string;
