pub mod board_view;
pub mod presenter;

pub use board_view::BoardApp;
pub use presenter::TuiPresenter;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tldboard_core::{Pipeline, RunSummary};
use tldboard_fetch::UserSource;

const SCROLL_STEP: u16 = 1;
const PAGE_STEP: u16 = 10;

/// Run the pipeline into a full-screen column board and browse it until
/// the user quits.
pub async fn run<S: UserSource>(pipeline: &Pipeline<S>) -> Result<RunSummary> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = setup_or_restore(setup_terminal, leave_raw_mode)?;

    let mut presenter = TuiPresenter::new(&mut terminal);
    let summary = pipeline.run(&mut presenter).await;
    let mut app = BoardApp::new(presenter.into_board());

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map(|_| summary)
}

/// Run `setup`; when it fails, undo raw mode before returning its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().or_else(|e| {
        restore()?;
        Err(e)
    })
}

fn leave_raw_mode() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut BoardApp,
) -> Result<()> {
    loop {
        terminal.draw(|f| board_view::ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            // Only process KeyPress events, ignore KeyRelease
            if key.kind != KeyEventKind::Press {
                continue;
            }

            handle_key(app, key.code);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut BoardApp, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_column(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.previous_column(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(SCROLL_STEP),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(SCROLL_STEP),
        KeyCode::PageDown => app.scroll_down(PAGE_STEP),
        KeyCode::PageUp => app.scroll_up(PAGE_STEP),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tldboard_core::{Board, CardModel, ColumnModel};

    fn app() -> BoardApp {
        let card = CardModel {
            name: "Name: A".to_string(),
            username: "Username: a".to_string(),
            website: "Website: a.com".to_string(),
        };
        BoardApp::new(Board {
            columns: vec![
                ColumnModel {
                    title: "com".to_string(),
                    cards: vec![card.clone(), card.clone(), card],
                    skipped: 0,
                },
                ColumnModel {
                    title: "org".to_string(),
                    cards: Vec::new(),
                    skipped: 0,
                },
            ],
            notices: Vec::new(),
        })
    }

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = std::cell::Cell::new(false);

        let result: Result<()> = setup_or_restore(
            || Err(anyhow::anyhow!("no alternate screen")),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = std::cell::Cell::new(false);

        let result = setup_or_restore(
            || Ok(7),
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            handle_key(&mut app, code);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_column_keys() {
        let mut app = app();

        handle_key(&mut app, KeyCode::Right);
        assert_eq!(app.first_column(), 1);

        handle_key(&mut app, KeyCode::Char('h'));
        assert_eq!(app.first_column(), 0);
    }

    #[test]
    fn test_scroll_keys_reset_on_column_change() {
        let mut app = app();

        handle_key(&mut app, KeyCode::Down);
        handle_key(&mut app, KeyCode::Char('j'));
        assert_eq!(app.scroll(), 2);

        handle_key(&mut app, KeyCode::Tab);
        assert_eq!(app.scroll(), 0);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = app();

        handle_key(&mut app, KeyCode::Char('x'));

        assert!(!app.should_quit);
        assert_eq!(app.first_column(), 0);
        assert_eq!(app.scroll(), 0);
    }
}
