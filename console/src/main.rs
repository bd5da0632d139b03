use tokio::io::{AsyncBufReadExt, BufReader};

use curator_console::app::{App, Notification};
use curator_console::config::ConsoleConfig;
use curator_console::debug;
use curator_console::ui::{Command, RenderSurface, TextSurface, HELP};

#[tokio::main(flavor = "current_thread")]
async fn main() -> curator_console::Result<()> {
    // Before logging so a .env RUST_LOG applies
    let _ = dotenvy::dotenv();
    let _log_guards = debug::init();

    let config = ConsoleConfig::from_env()?;
    tracing::info!(api_base = %config.api_base, probe_url = %config.probe_url, "Starting curator console");

    let mut app = App::new(&config)?;
    let mut surface = TextSurface::new(std::io::stdout());
    app.start();

    let events = app.events();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        for notification in app.take_notifications() {
            surface.notify(&notification)?;
        }
        if app.take_repaint() {
            surface.draw(&app.frame())?;
        }

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => surface.notify(&Notification::info(HELP))?,
                    Ok(Some(command)) => {
                        if let Err(e) = app.execute(command) {
                            surface.error(&e.to_string())?;
                        }
                    }
                    Err(e) => surface.error(&e.to_string())?,
                }
            }
            event = events.recv() => {
                match event {
                    Ok(event) => app.handle_event(event),
                    Err(_) => break,
                }
            }
        }
    }

    tracing::info!("Curator console exiting");
    Ok(())
}
