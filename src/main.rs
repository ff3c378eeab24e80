//! DrinkCraft - Entry Point
//!
//! Terminal front end for the drink builder and the sign-in / sign-up flow.

use log::{debug, info};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use drinkcraft::Session;
use drinkcraft::auth::InMemoryBackend;
use drinkcraft::commands::{CommandStatus, handle_command, parse_command};
use drinkcraft::config::AppConfig;
use drinkcraft::error::AppError;
use drinkcraft::error::handlers::handle_error;
use drinkcraft::middleware::RateLimiter;
use drinkcraft::utils::logging::setup_logging;

const MAX_COMMAND_LENGTH: usize = 512;
const PROMPT: &[u8] = b"drinkcraft> ";

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            handle_error(&AppError::from(e));
            std::process::exit(1);
        }
    };

    setup_logging(&config.log_level);
    info!("Launching DrinkCraft...");

    if let Err(e) = run(config).await {
        handle_error(&e);
        std::process::exit(1);
    }
}

/// Reads commands from stdin until QUIT or end of input.
async fn run(config: AppConfig) -> Result<(), AppError> {
    // One limiter for the whole process, handed to the auth flow
    let limiter = RateLimiter::from_config(&config.rate_limit);
    info!(
        "Rate limit: {} attempts per {} seconds",
        limiter.max_attempts(),
        limiter.window().as_secs()
    );

    let mut session = Session::new(InMemoryBackend::new(), limiter, &config);

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut line = String::new();

    stdout.write_all(b"Welcome to DrinkCraft. Type HELP for commands.\n").await?;

    loop {
        stdout.write_all(PROMPT).await?;
        stdout.flush().await?;

        line.clear();
        let n = reader.read_line(&mut line).await?;
        if n == 0 {
            info!("End of input");
            break;
        }

        if line.len() > MAX_COMMAND_LENGTH {
            stdout.write_all(b"Command too long\n").await?;
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_command(&line);
        let result = handle_command(&mut session, &command).await;

        if let Some(message) = result.message {
            stdout.write_all(message.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }

        match result.status {
            CommandStatus::Quit => break,
            CommandStatus::Failure(reason) => debug!("Command failed: {}", reason),
            CommandStatus::Success => {}
        }
    }

    stdout.flush().await?;
    Ok(())
}
