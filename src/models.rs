use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizPart {
    pub id: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Home,
    Quiz,
    Result,
}
