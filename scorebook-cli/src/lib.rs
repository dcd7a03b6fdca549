use anyhow::{Context, Result, anyhow};
use scorebook_core::{
    ExportFormat, GameSession, LeaderboardMetric, PlayerStats, Roster, SessionEvent, SessionEventHandler,
    format_percentage,
};
use scorebook_types::{ExportError, Play, Player, Side};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};

pub mod commands;
pub mod config;

use crate::commands::{Command, HELP};
use crate::config::Config;

/// Forwards session events to the tracing log.
pub struct TracingEventHandler;

impl SessionEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: &SessionEvent) {
        if event.touches_log() {
            info!("Session event: {:?}", event);
        } else {
            debug!("Session event: {:?}", event);
        }
    }
}

/// What a rendering layer needs to draw the current state.
#[derive(Serialize)]
struct SessionView<'a> {
    scoreboard: scorebook_types::Scoreboard,
    selected_player: Option<&'a Player>,
    home_players: &'a [Player],
    away_players: &'a [Player],
    plays: &'a [Play],
    can_undo: bool,
    can_redo: bool,
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

/// Line-oriented front end over one `GameSession`.
pub struct Console {
    session: GameSession,
    export_dir: PathBuf,
}

impl Console {
    pub fn new(config: &Config) -> Self {
        let roster = if config.sample_roster {
            Roster::sample()
        } else {
            Roster::new()
        };

        let mut session = GameSession::with_roster(config.session_settings(), roster);
        session.add_handler(Box::new(TracingEventHandler));

        Self {
            session,
            export_dir: config.export_dir.clone(),
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Parse and run one input line.
    pub fn handle_line(&mut self, line: &str) -> Result<Outcome> {
        let command = Command::parse(line)?;
        self.execute(command)
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let output = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),
            Command::Roster => self.render_roster(),
            Command::Plays => self.render_plays(),
            Command::Score => self.render_score(),
            Command::Stats => self.render_stats(),
            Command::Json => self.render_json()?,
            Command::Undo => {
                if self.session.undo() {
                    format!("Undone. {}", self.render_score())
                } else {
                    "Nothing to undo".to_string()
                }
            }
            Command::Redo => {
                if self.session.redo() {
                    format!("Redone. {}", self.render_score())
                } else {
                    "Nothing to redo".to_string()
                }
            }
            Command::Select { side, position } => {
                let player = self.player_at(side, position)?.clone();
                self.session.select_player(player.id);
                format!("Selected {} ({})", player.name, self.session.team_name(side))
            }
            Command::Action(action_type) => match self.session.record_action(action_type) {
                Some(play_id) => {
                    let play = self
                        .session
                        .log()
                        .find_play(play_id)
                        .ok_or_else(|| anyhow!("Recorded play {} is missing", play_id))?;
                    format!("{}: {}. {}", play.player_name, play.action(), self.render_score())
                }
                None => "Select a player first".to_string(),
            },
            Command::Edit {
                play,
                player_name,
                action_label,
            } => {
                let play_id = self.play_at(play)?.id;
                self.session.edit_play(play_id, player_name, action_label);
                format!("Play {} updated. {}", play + 1, self.render_score())
            }
            Command::Delete { play } => {
                let play_id = self.play_at(play)?.id;
                self.session.delete_play(play_id);
                format!("Play {} deleted. {}", play + 1, self.render_score())
            }
            Command::Leaders(metric) => self.render_leaders(metric),
            Command::Add { side, name, jersey } => {
                self.session.add_player(side, name.clone(), jersey);
                format!("Added {} to {}", name, self.session.team_name(side))
            }
            Command::Remove { side, position } => {
                let player_id = self.player_at(side, position)?.id;
                let removed = self
                    .session
                    .remove_player(player_id)
                    .ok_or_else(|| anyhow!("Player {} is not on the roster", player_id))?;
                format!("Removed {} from {}", removed.name, self.session.team_name(side))
            }
            Command::Move { side, from, to } => {
                if !self.session.reorder_players(side, from, to) {
                    return Err(anyhow!("No player at position {} or {}", from + 1, to + 1));
                }
                self.render_side(side)
            }
            Command::Export(format) => self.export(format)?,
        };

        Ok(Outcome::Continue(output))
    }

    /// Read commands until `quit` or end of input. Failed commands are
    /// reported and the loop carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.render_score())?;
        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line) {
                Ok(Outcome::Continue(text)) => writeln!(output, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!("Command failed: {}", e);
                    writeln!(output, "{}", e)?;
                }
            }
        }

        info!("Session ended at {}", self.render_score());
        Ok(())
    }

    fn export(&self, format: ExportFormat) -> Result<String> {
        let file = match self.session.export(format) {
            Ok(file) => file,
            Err(ExportError::NothingToExport) => return Ok(ExportError::NothingToExport.to_string()),
            Err(e) => return Err(e.into()),
        };

        std::fs::create_dir_all(&self.export_dir)
            .with_context(|| format!("Failed to create {}", self.export_dir.display()))?;
        let path = self.export_dir.join(&file.filename);
        std::fs::write(&path, &file.content).with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Wrote {} ({})", path.display(), file.mime_type);
        Ok(format!("Exported {} plays to {}", self.session.plays().len(), path.display()))
    }

    fn player_at(&self, side: Side, position: usize) -> Result<&Player> {
        self.session
            .roster()
            .players(side)
            .get(position)
            .ok_or_else(|| anyhow!("No {} player at position {}", side, position + 1))
    }

    fn play_at(&self, index: usize) -> Result<&Play> {
        self.session
            .plays()
            .get(index)
            .ok_or_else(|| anyhow!("No play number {}", index + 1))
    }

    fn render_score(&self) -> String {
        let board = self.session.scoreboard();
        format!(
            "{} {} - {} {}",
            board.home_team, board.home_score, board.away_score, board.away_team
        )
    }

    fn render_side(&self, side: Side) -> String {
        let mut out = format!("{} ({})", self.session.team_name(side), side);
        let selected = self.session.selected_player().map(|player| player.id);

        for player in self.session.roster().players(side) {
            if player.order == scorebook_types::STARTERS_PER_SIDE {
                out.push_str("\n  --- bench ---");
            }
            let jersey = player
                .jersey
                .as_ref()
                .map(|jersey| format!("#{} ", jersey))
                .unwrap_or_default();
            let marker = if selected == Some(player.id) { " *" } else { "" };
            out.push_str(&format!("\n  {}. {}{}{}", player.order + 1, jersey, player.name, marker));
        }
        out
    }

    fn render_roster(&self) -> String {
        Side::BOTH
            .iter()
            .map(|side| self.render_side(*side))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_plays(&self) -> String {
        if self.session.plays().is_empty() {
            return "No plays yet".to_string();
        }

        let mut out = String::new();
        for (index, play) in self.session.plays().iter().enumerate() {
            let points = if play.points > 0 {
                format!(" (+{})", play.points)
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{:>3}. {} {} ({}): {}{}\n",
                index + 1,
                play.timestamp.with_timezone(&chrono::Local).format("%H:%M:%S"),
                play.player_name,
                play.side,
                play.action(),
                points
            ));
        }
        out.trim_end().to_string()
    }

    fn render_stats(&self) -> String {
        let mut out = String::from("Player                  PTS  FGM-A  3PM-A  FTM-A  REB  AST  STL  BLK  TOV  PF");
        for entry in self.session.box_score() {
            out.push('\n');
            out.push_str(&stat_row(&entry));
        }

        for team in self.session.team_stats() {
            out.push_str(&format!(
                "\n{}: {} pts, FG {}, 3P {}, FT {}, {} reb, {} ast, {} stl, {} blk, {} tov, {} fouls",
                self.session.team_name(team.side),
                team.total_points,
                format_percentage(team.field_goal_percentage),
                format_percentage(team.three_point_percentage),
                format_percentage(team.free_throw_percentage),
                team.totals.rebounds,
                team.totals.assists,
                team.totals.steals,
                team.totals.blocks,
                team.totals.turnovers,
                team.totals.fouls,
            ));
        }
        out
    }

    fn render_leaders(&self, metric: LeaderboardMetric) -> String {
        self.session
            .leaderboard(metric)
            .iter()
            .enumerate()
            .map(|(rank, entry)| {
                format!(
                    "{}. {} ({}) {}",
                    rank + 1,
                    entry.player.name,
                    self.session.team_name(entry.player.side),
                    metric.value(&entry.line)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self) -> Result<String> {
        let roster = self.session.roster();
        let view = SessionView {
            scoreboard: self.session.scoreboard(),
            selected_player: self.session.selected_player(),
            home_players: roster.players(Side::Home),
            away_players: roster.players(Side::Away),
            plays: self.session.plays(),
            can_undo: self.session.can_undo(),
            can_redo: self.session.can_redo(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}

fn stat_row(entry: &PlayerStats) -> String {
    let line = &entry.line;
    format!(
        "{:<22} {:>4} {:>6} {:>6} {:>6} {:>4} {:>4} {:>4} {:>4} {:>4} {:>3}",
        entry.player.name,
        line.points,
        format!("{}-{}", line.field_goals_made, line.field_goals_attempted),
        format!("{}-{}", line.three_pointers_made, line.three_pointers_attempted),
        format!("{}-{}", line.free_throws_made, line.free_throws_attempted),
        line.rebounds,
        line.assists,
        line.steals,
        line.blocks,
        line.turnovers,
        line.fouls,
    )
}
