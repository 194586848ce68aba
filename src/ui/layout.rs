use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub progress_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub struct ResultLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub links_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Percentage(50),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        progress_area: chunks[1],
        question_area: chunks[2],
        options_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_result_chunks(area: Rect) -> ResultLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    ResultLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        links_area: chunks[2],
        help_area: chunks[3],
    }
}
