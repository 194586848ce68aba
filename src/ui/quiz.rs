use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

use crate::session::QuizSession;
use crate::ui::layout::calculate_quiz_chunks;

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let question = session.current_question();
    let progress = format!(
        "Question {} / {} - {}",
        session.current_index + 1,
        session.total(),
        session.title
    );

    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Yellow))
        .label(format!("{} / {}", session.current_index + 1, session.total()))
        .ratio((session.current_index + 1) as f64 / session.total() as f64);
    f.render_widget(gauge, layout.progress_area);

    let prompt = Paragraph::new(Text::from(question.prompt.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(prompt, layout.question_area);

    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let mut text = format!("{}. {}", option_label(i), option);
            let style = if session.answered {
                if i == question.correct_index {
                    text.push_str("  ✓");
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else if session.selected_option == Some(i) {
                    text.push_str("  ✗");
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::DarkGray)
                }
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Options"),
    );
    f.render_widget(options, layout.options_area);

    let mut help_spans = Vec::new();
    if !session.answered {
        help_spans.extend([
            Span::styled(
                "1-4/a-d",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Answer  "),
        ]);
    } else {
        help_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(if session.is_last_question() {
                " Results  "
            } else {
                " Next  "
            }),
        ]);
    }
    help_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Back to Home"),
    ]);

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn option_label(idx: usize) -> char {
    if idx < 26 {
        (b'A' + idx as u8) as char
    } else {
        '?'
    }
}
