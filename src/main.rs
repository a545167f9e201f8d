//! User App terminal client
//!
//! Lists, creates, edits and deletes users against the users REST backend.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use user_app::terminal::{parse_command, Command, HELP};
use user_app::{render, Config, Controller, UserClient, ViewState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging (stderr, the screen owns stdout)
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting User App");
    tracing::info!("API base URL: {}", config.api_base_url);

    let client = UserClient::from_config(&config)?;
    let mut controller = Controller::new(client);

    // Re-render after every state change
    let renderer = tokio::spawn(render_loop(controller.subscribe()));

    controller.initialize().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line, &controller.render()) {
            Ok(Command::Intent(intent)) => controller.dispatch(intent).await,
            Ok(Command::Help) => print_text(HELP),
            Ok(Command::Nothing) => print_text(&controller.render().to_string()),
            Ok(Command::Quit) => break,
            Err(e) => print_text(&e.to_string()),
        }
    }

    tracing::info!("Shutting down");
    drop(controller);
    renderer.await?;

    Ok(())
}

async fn render_loop(mut updates: watch::Receiver<ViewState>) {
    while updates.changed().await.is_ok() {
        let screen = render(&updates.borrow_and_update()).to_string();
        print_text(&screen);
    }
}

fn print_text(text: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{}", text).and_then(|()| stdout.flush()) {
        tracing::warn!("Failed to write to stdout: {}", e);
    }
}
