// Module declarations
pub mod action;
pub mod keys;
pub mod reducer;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
mod integration_tests;

pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use state::{AppState, FieldId};

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;

/// Main entry point for interactive mode.
///
/// `themes` is the read-only catalog snapshot consumed by the theme
/// selector. `set_link` is the parent's capability for receiving the
/// generated link; it is invoked exactly once per successful Generate.
pub async fn run(
    config: Config,
    themes: Vec<String>,
    mut set_link: impl FnMut(String),
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(&config, themes);

    // Main loop
    loop {
        terminal.draw(|f| view::render(f, &app_state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let Some(action) = key_to_action(key, &app_state) else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }

                tracing::trace!("ACTION: {:?}", action);
                let (next_state, effect) = reduce(app_state, action);
                app_state = next_state;

                if let Effect::PublishLink(link) = effect {
                    set_link(link);
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
