//! # Operator Commands
//!
//! One command per input line. Parsing never touches the controller, so
//! every rejection is reported before any state changes.

use shared::QualityScore;

use crate::app::state::Screen;
use crate::core::error::{AppError, Result};

pub const HELP: &str = "\
Commands:
  login <user> <password>                 authenticate
  go <dashboard|scrapers|deals|rate>      switch screen
  scrape <source-id>                      run a scraper
  search [text]                           filter deals by text (empty clears)
  category [name]                         filter deals by category (empty clears)
  rate <good|mediocre|bad> [reason...]    rate the deal on the card
  skip                                    skip the deal on the card
  probe                                   check backend reachability
  logout                                  forget the session
  help                                    show this text
  quit                                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Go(Screen),
    Scrape(i64),
    Search(Option<String>),
    Category(Option<String>),
    Rate { quality: QualityScore, reason: String },
    Skip,
    Probe,
    Logout,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        let rest_opt = (!rest.is_empty()).then(|| rest.to_string());

        let command = match verb.to_ascii_lowercase().as_str() {
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(username), Some(password), None) => Command::Login {
                        username: username.to_string(),
                        password: password.to_string(),
                    },
                    _ => return Err(usage("login <user> <password>")),
                }
            }
            "go" => {
                if rest.is_empty() {
                    return Err(usage("go <dashboard|scrapers|deals|rate>"));
                }
                Command::Go(rest.parse().map_err(AppError::Validation)?)
            }
            "scrape" => {
                let source_id = rest
                    .parse::<i64>()
                    .map_err(|_| AppError::Validation(format!("Invalid source id: '{}'", rest)))?;
                Command::Scrape(source_id)
            }
            "search" => Command::Search(rest_opt),
            "category" => Command::Category(rest_opt),
            "rate" => {
                let (quality, reason) = match rest.split_once(char::is_whitespace) {
                    Some((quality, reason)) => (quality, reason.trim()),
                    None => (rest, ""),
                };
                if quality.is_empty() {
                    return Err(usage("rate <good|mediocre|bad> [reason...]"));
                }
                Command::Rate {
                    quality: quality.parse().map_err(AppError::Validation)?,
                    reason: reason.to_string(),
                }
            }
            "skip" => Command::Skip,
            "probe" => Command::Probe,
            "logout" => Command::Logout,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => {
                return Err(AppError::Validation(format!(
                    "Unknown command '{}'. Type 'help' for a list.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Go(_) => "go",
            Command::Scrape(_) => "scrape",
            Command::Search(_) => "search",
            Command::Category(_) => "category",
            Command::Rate { .. } => "rate",
            Command::Skip => "skip",
            Command::Probe => "probe",
            Command::Logout => "logout",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn usage(text: &str) -> AppError {
    AppError::Validation(format!("Usage: {}", text))
}
