use anyhow::{bail, Context, Result};
use quoridor::{Action, Wall};

#[derive(Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Action(Action),
    Moves,
    Walls,
    Path,
    Board,
    Preview(Wall),
    Confirm,
    Cancel,
    NewGame,
    Quit,
    Noop,
}

pub fn parse_line(line: &str) -> Result<SessionCommand> {
    let mut tokens = line.split_whitespace();

    let command = match (tokens.next(), tokens.next()) {
        (None, _) => SessionCommand::Noop,
        (Some("preview"), Some(wall)) => SessionCommand::Preview(
            wall.parse()
                .with_context(|| format!("Could not preview {}", wall))?,
        ),
        (Some("preview"), None) => bail!("preview expects a wall, e.g. preview d5h"),
        (Some(command), Some(_)) => bail!("Unexpected arguments after {}", command),
        (Some("moves"), None) => SessionCommand::Moves,
        (Some("walls"), None) => SessionCommand::Walls,
        (Some("path"), None) => SessionCommand::Path,
        (Some("board"), None) => SessionCommand::Board,
        (Some("confirm"), None) => SessionCommand::Confirm,
        (Some("cancel"), None) => SessionCommand::Cancel,
        (Some("new"), None) => SessionCommand::NewGame,
        (Some("quit"), None) => SessionCommand::Quit,
        (Some(action), None) => SessionCommand::Action(
            action
                .parse()
                .with_context(|| format!("Unknown command or action: {}", action))?,
        ),
    };

    if tokens.next().is_some() {
        bail!("Unexpected arguments in: {}", line.trim());
    }

    Ok(command)
}
