//! # Interactive Prompts (`common::ui::prompt`)
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! ## Overview
//!
//! Line-oriented prompts for the command handlers. Questions are written to
//! stderr so stdout carries only command results; answers are read from stdin,
//! which keeps the prompts usable when input is piped.
//!
//! The answer parsing (`parse_confirmation`, `parse_choice`) is pure. The
//! reading functions loop until they get an acceptable answer. A closed stdin
//! falls back to the default where one exists; a confirmation with no input
//! at all is treated as declined.
//!
use crate::core::error::{Result, ToolrsError};
use anyhow::{anyhow, Context};
use console::{style, Term};
use std::io::{self, BufRead, Write};

/// Reads one line from stdin. `None` on end of input.
fn read_line() -> Result<Option<String>> {
    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read user input")?;
    Ok((read > 0).then(|| input.trim().to_string()))
}

fn write_question(text: &str) -> Result<()> {
    let mut term = Term::stderr();
    write!(term, "{} {} ", style("?").green().bold(), text).context("Failed to write prompt")?;
    term.flush().context("Failed to write prompt")
}

fn write_hint(text: &str) {
    let _ = Term::stderr().write_line(&style(text).yellow().to_string());
}

/// Asks for free text. An empty answer returns `default` when given and asks again otherwise.
pub fn ask(question: &str, default: Option<&str>) -> Result<String> {
    loop {
        match default {
            Some(d) => write_question(&format!("{} [{}]:", question, d))?,
            None => write_question(&format!("{}:", question))?,
        }
        match (read_line()?, default) {
            (Some(answer), _) if !answer.is_empty() => return Ok(answer),
            (_, Some(d)) => return Ok(d.to_string()),
            (None, None) => {
                return Err(anyhow!(ToolrsError::InvalidInput(format!(
                    "No answer given for '{}'",
                    question
                ))))
            }
            (Some(_), None) => write_hint("A value is required."),
        }
    }
}

/// Asks for optional free text; an empty answer or closed stdin is `None`.
pub fn ask_optional(question: &str) -> Result<Option<String>> {
    write_question(&format!("{}:", question))?;
    Ok(read_line()?.filter(|answer| !answer.is_empty()))
}

/// Asks for a secret without echoing it when stderr is a terminal.
pub fn ask_secret(question: &str) -> Result<String> {
    let term = Term::stderr();
    if term.is_term() {
        loop {
            write_question(&format!("{}:", question))?;
            let answer = term
                .read_secure_line()
                .context("Failed to read user input")?;
            if !answer.trim().is_empty() {
                return Ok(answer.trim().to_string());
            }
            write_hint("A value is required.");
        }
    }
    ask(question, None)
}

/// Interprets a yes/no answer. Empty input selects `default`; unknown input is `None`.
pub fn parse_confirmation(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Yes/no question.
pub fn confirm(question: &str, default: bool) -> Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    loop {
        write_question(&format!("{} {}", question, hint))?;
        let Some(answer) = read_line()? else {
            return Ok(false);
        };
        match parse_confirmation(&answer, default) {
            Some(decision) => return Ok(decision),
            None => write_hint("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

/// Interprets a choice among `options`: a 0-based index or an option name
/// (case-insensitive). Empty input selects `default`.
pub fn parse_choice(input: &str, options: &[&str], default: usize) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return (default < options.len()).then_some(default);
    }
    if let Ok(index) = input.parse::<usize>() {
        return (index < options.len()).then_some(index);
    }
    options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(input))
}

/// Numbered single choice; returns the selected index.
pub fn choose(question: &str, options: &[&str], default: usize) -> Result<usize> {
    if options.is_empty() {
        return Err(anyhow!(ToolrsError::InvalidInput(format!(
            "No options to choose from for '{}'",
            question
        ))));
    }
    let default = default.min(options.len() - 1);
    let term = Term::stderr();
    loop {
        term.write_line(&format!(
            "{} {} [{}]:",
            style("?").green().bold(),
            question,
            options[default]
        ))
        .context("Failed to write prompt")?;
        for (index, option) in options.iter().enumerate() {
            term.write_line(&format!("  [{}] {}", index, option))
                .context("Failed to write prompt")?;
        }
        write_question(">")?;
        let Some(answer) = read_line()? else {
            return Ok(default);
        };
        match parse_choice(&answer, options, default) {
            Some(index) => return Ok(index),
            None => write_hint(&format!("Value \"{}\" is invalid.", answer)),
        }
    }
}
