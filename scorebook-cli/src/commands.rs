use scorebook_core::{ActionCatalog, ExportFormat, LeaderboardMetric};
use scorebook_types::{ActionType, JerseyNumber, Side};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Usage: {0}")]
    Usage(&'static str),
    #[error("Unknown side: {0} (expected home or away)")]
    UnknownSide(String),
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Unknown leaderboard: {0} (expected points, assists or rebounds)")]
    UnknownMetric(String),
    #[error("Unknown export format: {0} (expected csv, xlsx or txt)")]
    UnknownFormat(String),
    #[error("Not a position number: {0}")]
    InvalidIndex(String),
}

/// One console instruction. Positions are 1-based, as shown by `roster`
/// and `plays`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    Roster,
    Plays,
    Score,
    Stats,
    Json,
    Undo,
    Redo,
    Select { side: Side, position: usize },
    Action(ActionType),
    Edit { play: usize, player_name: String, action_label: String },
    Delete { play: usize },
    Leaders(LeaderboardMetric),
    Add { side: Side, name: String, jersey: Option<JerseyNumber> },
    Remove { side: Side, position: usize },
    Move { side: Side, from: usize, to: usize },
    Export(ExportFormat),
}

pub const HELP: &str = "\
Commands:
  roster                         list both rosters
  select <home|away> <n>         pick the n-th player of a side
  action <code|label>            record an action for the selected player
                                 codes: 2pm 2px 3pm 3px ftm ftx ast tov oreb dreb stl blk pf tech flagrant
  undo | redo                    step through history
  plays                          list the play-by-play, newest first
  edit <n> <player>|<action>     rewrite the n-th play
  delete <n>                     delete the n-th play
  score                          show the scoreboard
  stats                          show the box score and team totals
  leaders <points|assists|rebounds>
  add <home|away> <name> [#jersey]
  remove <home|away> <n>
  move <home|away> <from> <to>
  export <csv|xlsx|txt>          write the play-by-play to a file
  json                           dump the session state as JSON
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };
        let args: Vec<&str> = rest.split_whitespace().collect();

        match keyword.to_lowercase().as_str() {
            "help" | "?" | "" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "roster" => Ok(Command::Roster),
            "plays" => Ok(Command::Plays),
            "score" => Ok(Command::Score),
            "stats" => Ok(Command::Stats),
            "json" => Ok(Command::Json),
            "undo" => Ok(Command::Undo),
            "redo" => Ok(Command::Redo),
            "select" => match args.as_slice() {
                [side, position] => Ok(Command::Select {
                    side: parse_side(side)?,
                    position: parse_position(position)?,
                }),
                _ => Err(CommandError::Usage("select <home|away> <n>")),
            },
            "action" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("action <code|label>"));
                }
                ActionCatalog::parse(rest)
                    .map(|definition| Command::Action(definition.action_type))
                    .ok_or_else(|| CommandError::UnknownAction(rest.to_string()))
            }
            "edit" => {
                const USAGE: &str = "edit <n> <player>|<action>";
                let (position, details) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage(USAGE))?;
                let (player_name, action_label) = details.split_once('|').ok_or(CommandError::Usage(USAGE))?;
                let (player_name, action_label) = (player_name.trim(), action_label.trim());
                if player_name.is_empty() || action_label.is_empty() {
                    return Err(CommandError::Usage(USAGE));
                }

                Ok(Command::Edit {
                    play: parse_position(position)?,
                    player_name: player_name.to_string(),
                    action_label: action_label.to_string(),
                })
            }
            "delete" => match args.as_slice() {
                [position] => Ok(Command::Delete {
                    play: parse_position(position)?,
                }),
                _ => Err(CommandError::Usage("delete <n>")),
            },
            "leaders" => match args.as_slice() {
                [metric] => LeaderboardMetric::parse(metric)
                    .map(Command::Leaders)
                    .ok_or_else(|| CommandError::UnknownMetric(metric.to_string())),
                _ => Err(CommandError::Usage("leaders <points|assists|rebounds>")),
            },
            "add" => match args.as_slice() {
                [side, name @ ..] if !name.is_empty() => {
                    let (name, jersey) = match name.split_last() {
                        Some((last, head)) if last.starts_with('#') && !head.is_empty() => {
                            (head.join(" "), JerseyNumber::parse(last))
                        }
                        _ => (name.join(" "), None),
                    };
                    Ok(Command::Add {
                        side: parse_side(side)?,
                        name,
                        jersey,
                    })
                }
                _ => Err(CommandError::Usage("add <home|away> <name> [#jersey]")),
            },
            "remove" => match args.as_slice() {
                [side, position] => Ok(Command::Remove {
                    side: parse_side(side)?,
                    position: parse_position(position)?,
                }),
                _ => Err(CommandError::Usage("remove <home|away> <n>")),
            },
            "move" => match args.as_slice() {
                [side, from, to] => Ok(Command::Move {
                    side: parse_side(side)?,
                    from: parse_position(from)?,
                    to: parse_position(to)?,
                }),
                _ => Err(CommandError::Usage("move <home|away> <from> <to>")),
            },
            "export" => match args.as_slice() {
                [format] => ExportFormat::parse(format)
                    .map(Command::Export)
                    .ok_or_else(|| CommandError::UnknownFormat(format.to_string())),
                _ => Err(CommandError::Usage("export <csv|xlsx|txt>")),
            },
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_side(input: &str) -> Result<Side, CommandError> {
    match input.to_lowercase().as_str() {
        "home" | "h" => Ok(Side::Home),
        "away" | "a" => Ok(Side::Away),
        _ => Err(CommandError::UnknownSide(input.to_string())),
    }
}

/// 1-based position to 0-based index.
fn parse_position(input: &str) -> Result<usize, CommandError> {
    match input.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(CommandError::InvalidIndex(input.to_string())),
    }
}
