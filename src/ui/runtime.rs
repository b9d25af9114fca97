use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::query::QueryClient;
use crate::ui::app::{App, Screen};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: Config, initial: Screen) -> Result<()> {
    // Build the client before touching the terminal so failures print
    // normally.
    let client = QueryClient::from_config(&config.query)?;
    tracing::debug!(endpoint = client.endpoint(), "query client ready");

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(&config, initial);
    app.attach_query_client(client, events.sender());
    app.set_submit_hook(Box::new(|values| {
        tracing::info!(name = %values.name, email = %values.email, "form submitted");
    }));
    app.on_mount();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::QuerySettled { key, outcome }) => app.on_query_settled(key, outcome),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
