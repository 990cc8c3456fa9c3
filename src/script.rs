// 📜 Script Mode - drive the roster from comma-separated commands
//
//   add,NAME,SURNAME,AGE
//   update,INDEX,NAME,SURNAME,AGE
//   remove,INDEX
//   list
//
// INDEX -1 means "nothing selected". Lines starting with '#' are comments.

use crate::error::{Action, RosterError};
use crate::roster::Roster;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::{Read, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        surname: String,
        age: String,
    },
    Update {
        index: Option<usize>,
        name: String,
        surname: String,
        age: String,
    },
    Remove {
        index: Option<usize>,
    },
    List,
}

impl Command {
    /// Parse a CSV record into a command
    pub fn parse(record: &StringRecord) -> std::result::Result<Command, String> {
        let verb = record.get(0).unwrap_or("").trim().to_lowercase();
        let fields: Vec<&str> = record.iter().skip(1).collect();

        match (verb.as_str(), fields.as_slice()) {
            ("add", [name, surname, age]) => Ok(Command::Add {
                name: name.to_string(),
                surname: surname.to_string(),
                age: age.to_string(),
            }),
            ("update", [index, name, surname, age]) => Ok(Command::Update {
                index: parse_index(index)?,
                name: name.to_string(),
                surname: surname.to_string(),
                age: age.to_string(),
            }),
            ("remove", [index]) => Ok(Command::Remove {
                index: parse_index(index)?,
            }),
            ("list", []) => Ok(Command::List),
            ("add", _) => Err("usage: add,NAME,SURNAME,AGE".to_string()),
            ("update", _) => Err("usage: update,INDEX,NAME,SURNAME,AGE".to_string()),
            ("remove", _) => Err("usage: remove,INDEX".to_string()),
            ("list", _) => Err("usage: list".to_string()),
            (other, _) => Err(format!("unknown command: {}", other)),
        }
    }
}

/// Negative indexes mean no selection
fn parse_index(text: &str) -> std::result::Result<Option<usize>, String> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|_| format!("invalid index: {}", text.trim()))?;

    Ok(usize::try_from(value).ok())
}

/// Run every command in `input` against `roster`, writing one outcome line
/// per command to `out`. Bad commands are reported and skipped.
pub fn run_script<R: Read, W: Write>(
    roster: &mut Roster,
    input: R,
    out: &mut W,
) -> Result<ScriptSummary> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::None)
        .from_reader(input);

    let mut summary = ScriptSummary::default();

    for result in reader.records() {
        let outcome = match result {
            Ok(record) if is_blank_or_comment(&record) => continue,
            Ok(record) => {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                debug!(line, "script command");
                match Command::parse(&record) {
                    Ok(command) => execute(roster, command, out)?,
                    Err(message) => Err(message),
                }
            }
            Err(err) => Err(format!("unreadable line: {}", err)),
        };

        match outcome {
            Ok(Some(message)) => {
                summary.succeeded += 1;
                writeln!(out, "ok: {}", message).context("Failed to write script output")?;
            }
            Ok(None) => summary.succeeded += 1,
            Err(message) => {
                summary.failed += 1;
                writeln!(out, "error: {}", message).context("Failed to write script output")?;
            }
        }
    }

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed,
        "script finished"
    );

    Ok(summary)
}

// The reader only drops empty lines and '#' in column 0
fn is_blank_or_comment(record: &StringRecord) -> bool {
    let starts_comment = record
        .get(0)
        .is_some_and(|first| first.trim_start().starts_with('#'));

    starts_comment || record.iter().all(|field| field.trim().is_empty())
}

// Ok(Ok(Some(msg))) = success with a message; Ok(Err(msg)) = user-facing failure
fn execute<W: Write>(
    roster: &mut Roster,
    command: Command,
    out: &mut W,
) -> Result<std::result::Result<Option<String>, String>> {
    let result = match command {
        Command::Add { name, surname, age } => roster
            .add(&name, &surname, &age)
            .map(|_| Some(Action::Add.success_message().to_string())),
        Command::Update {
            index,
            name,
            surname,
            age,
        } => roster
            .update(index, &name, &surname, &age)
            .map(|_| Some(Action::Update.success_message().to_string())),
        Command::Remove { index } => roster
            .remove(index)
            .map(|_| Some(Action::Remove.success_message().to_string())),
        Command::List => {
            for (i, record) in roster.iter().enumerate() {
                writeln!(out, "{}\t{}\t{}\t{}", i, record.name, record.surname, record.age)
                    .context("Failed to write script output")?;
            }
            Ok(None)
        }
    };

    Ok(result.map_err(|err| one_line(&err)))
}

fn one_line(err: &RosterError) -> String {
    match err {
        RosterError::Validation(errors) => errors.join("; "),
        other => other.to_string(),
    }
}
