use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use interactive_quiz::models::AppState;
use interactive_quiz::session::{QuizSession, handle_quiz_input};
use interactive_quiz::{catalog, logger, ui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init();

    // Load and validate the whole catalog before touching the terminal so
    // data errors print as plain messages.
    let catalog = catalog::load_catalog()?;
    logger::log(&format!("Loaded {} quiz part(s)", catalog.len()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Home;
    let mut selected_part_index: usize = 0;
    let mut session: Option<QuizSession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Home => ui::draw_home(f, &catalog, selected_part_index),
            AppState::Quiz => {
                if let Some(session) = &session {
                    ui::draw_quiz(f, session);
                }
            }
            AppState::Result => {
                if let Some(session) = &session {
                    ui::draw_result(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Home => match key.code {
                    KeyCode::Up => {
                        if selected_part_index > 0 {
                            selected_part_index -= 1;
                        }
                    }
                    KeyCode::Down => {
                        if selected_part_index < catalog.len().saturating_sub(1) {
                            selected_part_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        if let Some(part) = catalog.get(selected_part_index) {
                            match QuizSession::build(part, &mut rand::thread_rng()) {
                                Ok(new_session) => {
                                    logger::log(&format!(
                                        "Started part {} ({})",
                                        part.id, part.title
                                    ));
                                    session = Some(new_session);
                                    app_state = AppState::Quiz;
                                }
                                Err(e) => {
                                    logger::log(&format!(
                                        "Failed to start part {}: {}",
                                        part.id, e
                                    ));
                                }
                            }
                        }
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(active) = session.as_mut() {
                        handle_quiz_input(active, key, &mut app_state);
                        if app_state == AppState::Result {
                            logger::log(&format!(
                                "Session complete: part {} scored {} / {}",
                                active.part_id,
                                active.score,
                                active.total()
                            ));
                        }
                    }
                    // Leaving mid-quiz discards the session entirely.
                    if app_state == AppState::Home {
                        session = None;
                    }
                }
                AppState::Result => match key.code {
                    KeyCode::Char('r') => {
                        // Rebuild from the original part in the catalog, not
                        // from the already-shuffled session.
                        let part_id = session.as_ref().map(|s| s.part_id);
                        if let Some(part_id) = part_id
                            && let Some(part) = catalog.iter().find(|p| p.id == part_id)
                        {
                            match QuizSession::build(part, &mut rand::thread_rng()) {
                                Ok(new_session) => {
                                    logger::log(&format!("Restarted part {}", part.id));
                                    session = Some(new_session);
                                    app_state = AppState::Quiz;
                                }
                                Err(e) => {
                                    logger::log(&format!(
                                        "Failed to restart part {}: {}",
                                        part_id, e
                                    ));
                                }
                            }
                        }
                    }
                    KeyCode::Char('m') | KeyCode::Esc => {
                        app_state = AppState::Home;
                        session = None;
                    }
                    KeyCode::Char('q') => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
