use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::session::QuizSession;
use crate::ui::layout::calculate_result_chunks;
use crate::ui::{PAYMENT_LINK, TELEGRAM_LINK};

pub fn draw_result(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_result_chunks(f.area());

    let title = Paragraph::new(format!("Result - {}", session.title))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let percent = session.score_percent();
    let (feedback, color) = feedback_for(percent);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("Score: {} / {}", session.score, session.total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("{}%", percent),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        feedback,
        Style::default().fg(color),
    )));

    let score = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Result"));
    f.render_widget(score, layout.score_area);

    let links = Paragraph::new(vec![
        Line::from(format!("Support the app: {}", PAYMENT_LINK)),
        Line::from(format!("Telegram channel: {}", TELEGRAM_LINK)),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(links, layout.links_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "r",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart Part  "),
        Span::styled(
            "m",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Home  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn feedback_for(percent: u32) -> (&'static str, Color) {
    if percent >= 80 {
        ("Excellent! You are well prepared.", Color::Green)
    } else if percent >= 50 {
        ("Good effort! Keep practicing.", Color::Yellow)
    } else {
        ("Try again! Don't give up.", Color::Red)
    }
}
