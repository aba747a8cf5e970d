//! # Terminal User Interface Module
//!
//! Terminal lifecycle and the main event loop. The loop pumps the session
//! timer, redraws, and dispatches keyboard and mouse events to the input
//! adapters at a 100 ms poll interval.

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

/// Main entry point for the terminal user interface.
///
/// Initializes the terminal, runs the event loop until the user quits,
/// and restores the terminal on the way out.
///
/// # Errors
/// Returns an error if terminal initialization, event handling, or cleanup
/// fails.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;

    loop {
        if app.should_quit {
            break;
        }

        app.update();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect =
                        Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(
                        app,
                        mouse.kind,
                        mouse.column,
                        mouse.row,
                        terminal_rect,
                    );
                }
                _ => {}
            }
        }
    }

    restore_terminal(&mut terminal)
}

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture enabled.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}
