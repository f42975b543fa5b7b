//! Script command language for the run driver.
//!
//! One command per line:
//! - `add buy milk`
//! - `edit 0 buy oat milk`
//! - `toggle 0`
//! - `delete 0`
//! - `clear`
//! - `filter show_completed`
//! - `list`
//! - `stats`
//!
//! Blank lines and `#` comments are skipped. Task text runs to the end
//! of the line and may be empty.

use crate::error::{Error, Result};
use crate::filter::FilterMode;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Add { text: String },
    Edit { id: u64, text: String },
    Toggle { id: u64 },
    Delete { id: u64 },
    Clear,
    Filter { mode: FilterMode },
    List,
    Stats,
}

impl ScriptCommand {
    /// Command name used in output envelopes.
    pub fn name(&self) -> &'static str {
        match self {
            ScriptCommand::Add { .. } => "add",
            ScriptCommand::Edit { .. } => "edit",
            ScriptCommand::Toggle { .. } => "toggle",
            ScriptCommand::Delete { .. } => "delete",
            ScriptCommand::Clear => "clear",
            ScriptCommand::Filter { .. } => "filter",
            ScriptCommand::List => "list",
            ScriptCommand::Stats => "stats",
        }
    }
}

/// Parse a single line. Returns `None` for blanks and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match keyword {
        "add" => ScriptCommand::Add {
            text: rest.to_string(),
        },
        "edit" => {
            let (id_token, text) = match rest.split_once(char::is_whitespace) {
                Some((id_token, text)) => (id_token, text.trim_start()),
                None => (rest, ""),
            };
            if id_token.is_empty() {
                return Err(Error::InvalidArgument(
                    "edit requires a task id".to_string(),
                ));
            }
            ScriptCommand::Edit {
                id: parse_id(id_token)?,
                text: text.to_string(),
            }
        }
        "toggle" => ScriptCommand::Toggle {
            id: parse_single_id("toggle", rest)?,
        },
        "delete" => ScriptCommand::Delete {
            id: parse_single_id("delete", rest)?,
        },
        "clear" => parse_bare("clear", rest, ScriptCommand::Clear)?,
        "filter" => {
            if rest.is_empty() {
                return Err(Error::InvalidArgument(
                    "filter requires a mode name".to_string(),
                ));
            }
            ScriptCommand::Filter {
                mode: FilterMode::parse_lenient(rest),
            }
        }
        "list" => parse_bare("list", rest, ScriptCommand::List)?,
        "stats" => parse_bare("stats", rest, ScriptCommand::Stats)?,
        other => return Err(Error::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

/// Parse a whole script, dropping blanks and comments.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>> {
    let mut commands = Vec::new();
    for line in source.lines() {
        if let Some(command) = parse_line(line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

fn parse_id(token: &str) -> Result<u64> {
    token
        .parse::<u64>()
        .map_err(|_| Error::InvalidArgument(format!("invalid task id '{token}'")))
}

fn parse_single_id(keyword: &str, rest: &str) -> Result<u64> {
    let mut tokens = rest.split_whitespace();
    let id_token = tokens
        .next()
        .ok_or_else(|| Error::InvalidArgument(format!("{keyword} requires a task id")))?;
    if tokens.next().is_some() {
        return Err(Error::InvalidArgument(format!(
            "{keyword} takes exactly one task id"
        )));
    }
    parse_id(id_token)
}

fn parse_bare(keyword: &str, rest: &str, command: ScriptCommand) -> Result<ScriptCommand> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(Error::InvalidArgument(format!(
            "{keyword} takes no arguments"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_form() {
        assert_eq!(
            parse_line("add buy milk").unwrap(),
            Some(ScriptCommand::Add {
                text: "buy milk".to_string()
            })
        );
        assert_eq!(
            parse_line("edit 3 new text here").unwrap(),
            Some(ScriptCommand::Edit {
                id: 3,
                text: "new text here".to_string()
            })
        );
        assert_eq!(
            parse_line("toggle 0").unwrap(),
            Some(ScriptCommand::Toggle { id: 0 })
        );
        assert_eq!(
            parse_line("delete 7").unwrap(),
            Some(ScriptCommand::Delete { id: 7 })
        );
        assert_eq!(parse_line("clear").unwrap(), Some(ScriptCommand::Clear));
        assert_eq!(
            parse_line("filter completed").unwrap(),
            Some(ScriptCommand::Filter {
                mode: FilterMode::ShowCompleted
            })
        );
        assert_eq!(parse_line("list").unwrap(), Some(ScriptCommand::List));
        assert_eq!(parse_line("stats").unwrap(), Some(ScriptCommand::Stats));
    }

    #[test]
    fn add_and_edit_accept_empty_text() {
        assert_eq!(
            parse_line("add").unwrap(),
            Some(ScriptCommand::Add {
                text: String::new()
            })
        );
        assert_eq!(
            parse_line("edit 2").unwrap(),
            Some(ScriptCommand::Edit {
                id: 2,
                text: String::new()
            })
        );
    }

    #[test]
    fn blanks_and_comments_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   ").unwrap(), None);
        assert_eq!(parse_line("# add nothing").unwrap(), None);
    }

    #[test]
    fn unknown_filter_names_fall_back_to_show_all() {
        assert_eq!(
            parse_line("filter BogusValue").unwrap(),
            Some(ScriptCommand::Filter {
                mode: FilterMode::ShowAll
            })
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            parse_line("toggle abc"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_line("delete"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_line("toggle 1 2"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_line("clear everything"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_line("frobnicate 1"),
            Err(Error::UnknownCommand(_))
        ));
    }

    #[test]
    fn parse_script_keeps_command_order() {
        let script = "add one\n\n# comment\nadd two\ntoggle 0\nstats\n";
        let commands = parse_script(script).unwrap();
        let names: Vec<&str> = commands.iter().map(|command| command.name()).collect();
        assert_eq!(names, vec!["add", "add", "toggle", "stats"]);
    }
}
