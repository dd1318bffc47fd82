// Console front end
// Turns typed commands into intents and renders screen state as text

use crate::models::form::FormField;
use crate::models::settings::LinkSettings;
use crate::services::launching::{LaunchingEffect, LaunchingIntent, LaunchingScreenState};

pub const HELP: &str = "\
Commands:
  name <value>         set full name
  email <value>        set email address
  institution <value>  set institution
  role <value>         set role
  referral <value>     set referral code (optional)
  agree yes|no         accept or decline the terms
  submit               request early access
  dismiss              clear the error message
  close                close the success dialog
  open <link|url>      open website, terms, privacy or any URL
  refresh              recompute the countdown now
  restart              restart the countdown timer
  status               show the whole screen
  json                 dump the screen state as JSON
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    Intent(LaunchingIntent),
    Status,
    Json,
    Help,
    Quit,
}

pub fn parse_command(line: &str, links: &LinkSettings) -> Result<ConsoleCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" => return Err("Type 'help' for a list of commands".to_string()),
        "name" | "email" | "institution" | "role" | "referral" => {
            let field: FormField = verb.parse()?;
            ConsoleCommand::Intent(LaunchingIntent::update_field(field, rest))
        }
        "agree" => match rest.to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" => ConsoleCommand::Intent(LaunchingIntent::UpdateAgreeToTerms(true)),
            "no" | "n" | "false" => ConsoleCommand::Intent(LaunchingIntent::UpdateAgreeToTerms(false)),
            _ => return Err("Usage: agree yes|no".to_string()),
        },
        "submit" => ConsoleCommand::Intent(LaunchingIntent::Submit),
        "dismiss" => ConsoleCommand::Intent(LaunchingIntent::ClearError),
        "close" => ConsoleCommand::Intent(LaunchingIntent::CloseSuccessDialog),
        "open" if rest.is_empty() => return Err("Usage: open website|terms|privacy|<url>".to_string()),
        "open" => {
            let url = links.resolve(rest).unwrap_or(rest).to_string();
            ConsoleCommand::Intent(LaunchingIntent::OpenLink(url))
        }
        "refresh" => ConsoleCommand::Intent(LaunchingIntent::UpdateCountdown),
        "restart" => ConsoleCommand::Intent(LaunchingIntent::InitializeCountdown),
        "status" => ConsoleCommand::Status,
        "json" => ConsoleCommand::Json,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("Unknown command '{}'. Type 'help'.", other)),
    };
    Ok(command)
}

pub fn render_countdown(state: &LaunchingScreenState) -> String {
    if state.has_launched() {
        "Launch Countdown: we are live!".to_string()
    } else {
        format!("Launch Countdown: {}", state.countdown)
    }
}

pub fn render_form(state: &LaunchingScreenState) -> Vec<String> {
    let form = &state.form;
    let mut lines = Vec::new();

    for field in FormField::ALL {
        let value = form.value(field);
        let shown = if value.is_empty() { "-" } else { value };
        match form.error(field) {
            Some(error) => lines.push(format!("  {:<14} {}  ! {}", field.label(), shown, error)),
            None => lines.push(format!("  {:<14} {}", field.label(), shown)),
        }
    }
    lines.push(format!(
        "  {:<14} {}",
        "Terms",
        if form.agree_to_terms { "agreed" } else { "not agreed" }
    ));

    if form.is_submitting {
        lines.push("  Submitting...".to_string());
    }
    if let Some(error) = &form.error_message {
        lines.push(format!("  Error: {} (type 'dismiss')", error));
    }
    if form.show_success_dialog {
        lines.push(format!("  Success: {}", form.success_message));
        if let Some(code) = &form.access_code {
            lines.push(format!("  Access code: {}", code));
        }
    }
    lines
}

pub fn render_json(state: &LaunchingScreenState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(state)
}

pub fn render_effect(effect: &LaunchingEffect) -> String {
    match effect {
        LaunchingEffect::ShowSuccess(message) => format!("* {}", message),
        LaunchingEffect::ShowError(message) => format!("! {}", message),
        LaunchingEffect::OpenLink(url) => format!("> opening {}", url),
    }
}
