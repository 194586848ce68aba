use crate::catalog::validate_part;
use crate::error::CatalogError;
use crate::models::{AppState, Question, QuizPart};
use crossterm::event::{KeyCode, KeyEvent};
use rand::Rng;
use rand::seq::SliceRandom;

/// One randomized attempt at a quiz part. The question sequence is fixed at
/// build time; only the cursor, the per-question answer state and the score
/// change afterwards.
#[derive(Debug)]
pub struct QuizSession {
    pub part_id: u32,
    pub title: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected_option: Option<usize>,
    pub answered: bool,
    pub score: usize,
    complete: bool,
}

impl QuizSession {
    /// Builds a fresh session from an unshuffled part: question order is
    /// shuffled, and within each question the option order is shuffled
    /// independently with the correct index remapped to follow its option.
    ///
    /// The random source is injected so tests can seed it.
    pub fn build(part: &QuizPart, rng: &mut impl Rng) -> Result<Self, CatalogError> {
        validate_part(part)?;

        let mut questions = part.questions.clone();
        questions.shuffle(rng);

        for question in &mut questions {
            // Shuffle an index sequence rather than the options themselves so
            // the new position of the correct option can be read back out.
            let mut order: Vec<usize> = (0..question.options.len()).collect();
            order.shuffle(rng);

            let mut options = Vec::with_capacity(order.len());
            let mut correct_index = question.correct_index;
            for (new_pos, &old_pos) in order.iter().enumerate() {
                options.push(question.options[old_pos].clone());
                if old_pos == question.correct_index {
                    correct_index = new_pos;
                }
            }
            question.options = options;
            question.correct_index = correct_index;
        }

        Ok(Self {
            part_id: part.id,
            title: part.title.clone(),
            questions,
            current_index: 0,
            selected_option: None,
            answered: false,
            score: 0,
            complete: false,
        })
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current_index]
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Records an answer for the current question. Ignored if the question
    /// is already answered, the session is complete, or the index does not
    /// name an option.
    pub fn select_option(&mut self, idx: usize) {
        if self.answered || self.complete {
            return;
        }
        if idx >= self.current_question().options.len() {
            return;
        }

        self.selected_option = Some(idx);
        self.answered = true;
        if idx == self.current_question().correct_index {
            self.score += 1;
        }
    }

    /// Moves to the next question, or marks the session complete after the
    /// last one. Ignored until the current question has been answered.
    pub fn advance(&mut self) {
        if !self.answered || self.complete {
            return;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.selected_option = None;
            self.answered = false;
        } else {
            self.complete = true;
        }
    }

    pub fn score_percent(&self) -> u32 {
        (self.score as f64 / self.questions.len() as f64 * 100.0).round() as u32
    }
}

pub fn handle_quiz_input(session: &mut QuizSession, key: KeyEvent, app_state: &mut AppState) {
    if !session.answered {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::Home;
            }
            KeyCode::Char(c) => {
                if let Some(idx) = option_index_for_key(c) {
                    session.select_option(idx);
                }
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::Home;
            }
            KeyCode::Enter => {
                session.advance();
                if session.is_complete() {
                    *app_state = AppState::Result;
                }
            }
            _ => {}
        }
    }
}

/// Maps option keys to indices: '1'..'9' and 'a'..'z' (or uppercase) both
/// work, so the footer can advertise either style.
fn option_index_for_key(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '1' as usize),
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}
