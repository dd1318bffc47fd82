// Launch Screen
// Console entry point: countdown to launch plus the early access form

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use launch_screen::console::{self, ConsoleCommand};
use launch_screen::services::clock::SystemClock;
use launch_screen::services::launching::{
    LaunchingController, LaunchingDependencies, LaunchingIntent,
};
use launch_screen::services::link::{BrowserLinkOpener, LinkOpener, LoggingLinkOpener};
use launch_screen::services::settings::SettingsService;
use launch_screen::services::submission::SimulatedEarlyAccessClient;

const LOG_FILTER_ENV: &str = "RUST_LOG";

struct CliArgs {
    config: Option<PathBuf>,
    no_browser: bool,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = Self {
            config: None,
            no_browser: false,
        };
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config requires a path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--no-browser" => parsed.no_browser = true,
                other => return Err(anyhow!("Unknown argument: {}", other)),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1))?;

    // Initialize logging before settings are read so their load is logged;
    // RUST_LOG wins over the configured level
    let filter_from_env = std::env::var_os(LOG_FILTER_ENV).is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();
    if !filter_from_env {
        log::set_max_level(LevelFilter::Info);
    }

    log::info!("Starting Launch Screen");
    let settings_service = match &args.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_project_dirs(),
    };
    let settings = settings_service.load()?;
    if !filter_from_env {
        if let Some(level) = settings.log_filter()? {
            log::set_max_level(level);
        }
    }
    log::info!(
        "Settings from {}: launch at {}",
        settings_service.path().display(),
        settings.launch_target
    );

    let link_opener: Arc<dyn LinkOpener> = if args.no_browser {
        Arc::new(LoggingLinkOpener)
    } else {
        Arc::new(BrowserLinkOpener::new())
    };
    let deps = LaunchingDependencies {
        clock: Arc::new(SystemClock),
        client: Arc::new(SimulatedEarlyAccessClient::new(settings.simulated_latency())),
        link_opener,
    };

    let mut controller = LaunchingController::from_settings(deps, &settings);
    let mut effects = controller
        .take_effects()
        .context("effect stream already taken")?;
    let mut updates = controller.subscribe();
    controller.handle_intent(LaunchingIntent::InitializeCountdown);

    println!("{}", console::render_countdown(&controller.state()));
    println!("Early access waitlist. Type 'help' for commands.");

    let mut last_state = controller.state();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else {
                    break;
                };
                match console::parse_command(&line, &settings.links) {
                    Ok(ConsoleCommand::Quit) => break,
                    Ok(ConsoleCommand::Help) => println!("{}", console::HELP),
                    Ok(ConsoleCommand::Status) => {
                        let state = controller.state();
                        println!("{}", console::render_countdown(&state));
                        for line in console::render_form(&state) {
                            println!("{}", line);
                        }
                    }
                    Ok(ConsoleCommand::Json) => match console::render_json(&controller.state()) {
                        Ok(json) => println!("{}", json),
                        Err(e) => log::error!("Failed to serialize screen state: {}", e),
                    },
                    Ok(ConsoleCommand::Intent(intent)) => {
                        controller.handle_intent(intent);
                    }
                    Err(message) => println!("{}", message),
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();

                // one line per minute, plus the moment of launch
                if state.countdown.minutes != last_state.countdown.minutes
                    || state.has_launched() != last_state.has_launched()
                {
                    println!("{}", console::render_countdown(&state));
                }
                if state.form != last_state.form {
                    for line in console::render_form(&state) {
                        println!("{}", line);
                    }
                }
                last_state = state;
            }
            Some(effect) = effects.recv() => {
                println!("{}", console::render_effect(&effect));
            }
        }
        std::io::stdout().flush().ok();
    }

    controller.shutdown();
    log::info!("Launch Screen closed");
    Ok(())
}
