use chrono::TimeZone;
use scorebook_types::{
    ActionType, ExportError, JerseyNumber, Play, PlayId, Player, PlayerId, Scoreboard, Side,
};
use tracing::{debug, info};

use crate::{
    ActionCatalog, ExportFile, ExportFormat, LeaderboardMetric, PlayExporter, PlayLog, PlayerStats,
    Roster, SessionEvent, SessionEventBus, SessionEventHandler, StatsAggregator, TeamStats,
};

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub home_team: String,
    pub away_team: String,
    pub history_limit: Option<usize>, // None or 0 keeps every undo step
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            home_team: "Warriors".to_string(),
            away_team: "Lakers".to_string(),
            history_limit: None,
        }
    }
}

/// One scorekeeping session: the roster, the play log, and which player the
/// scorekeeper currently has selected.
pub struct GameSession {
    home_team: String,
    away_team: String,
    roster: Roster,
    log: PlayLog,
    selected: Option<PlayerId>,
    event_bus: SessionEventBus,
}

impl GameSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self::with_roster(settings, Roster::new())
    }

    pub fn with_roster(settings: SessionSettings, roster: Roster) -> Self {
        let log = match settings.history_limit {
            Some(limit) => PlayLog::with_history_limit(limit),
            None => PlayLog::new(),
        };

        info!(
            "New session: {} (home) vs {} (away), {} players",
            settings.home_team,
            settings.away_team,
            roster.len()
        );

        Self {
            home_team: settings.home_team,
            away_team: settings.away_team,
            roster,
            log,
            selected: None,
            event_bus: SessionEventBus::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn log(&self) -> &PlayLog {
        &self.log
    }

    pub fn plays(&self) -> &[Play] {
        self.log.plays()
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.log.home_score(),
            away_score: self.log.away_score(),
        }
    }

    pub fn selected_player(&self) -> Option<&Player> {
        self.selected.and_then(|player_id| self.roster.get(player_id))
    }

    /// Select a rostered player as the target of the next action.
    pub fn select_player(&mut self, player_id: PlayerId) -> bool {
        if self.roster.get(player_id).is_none() {
            debug!("Ignoring selection of unknown player {}", player_id);
            return false;
        }

        self.selected = Some(player_id);
        self.event_bus.publish(SessionEvent::PlayerSelected { player_id });
        true
    }

    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.event_bus.publish(SessionEvent::SelectionCleared);
        }
    }

    /// Record an action for the selected player, then clear the selection so
    /// the next action needs a fresh pick. Without a selection nothing happens.
    pub fn record_action(&mut self, action_type: ActionType) -> Option<PlayId> {
        let Some(player) = self.selected_player().cloned() else {
            debug!("No player selected, ignoring {:?}", action_type);
            return None;
        };

        let action = ActionCatalog::get(action_type);
        let play_id = self.log.record(&player, action);
        self.selected = None;

        self.event_bus.publish(SessionEvent::PlayRecorded {
            play_id,
            side: player.side,
            points: action.credited_points(),
        });
        Some(play_id)
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.log.undo();
        if changed {
            self.event_bus.publish(SessionEvent::Undone);
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.log.redo();
        if changed {
            self.event_bus.publish(SessionEvent::Redone);
        }
        changed
    }

    pub fn edit_play(&mut self, play_id: PlayId, player_name: impl Into<String>, action_label: impl Into<String>) -> bool {
        let changed = self.log.edit_play(play_id, player_name, action_label);
        if changed {
            self.event_bus.publish(SessionEvent::PlayEdited { play_id });
        }
        changed
    }

    pub fn delete_play(&mut self, play_id: PlayId) -> Option<Play> {
        let removed = self.log.delete_play(play_id)?;
        self.event_bus.publish(SessionEvent::PlayDeleted { play_id });
        Some(removed)
    }

    pub fn add_player(&mut self, side: Side, name: impl Into<String>, jersey: Option<JerseyNumber>) -> PlayerId {
        let player_id = self.roster.add(side, name, jersey);
        self.event_bus.publish(SessionEvent::RosterChanged { side });
        player_id
    }

    pub fn edit_player(&mut self, player_id: PlayerId, name: impl Into<String>, jersey: Option<JerseyNumber>) -> bool {
        let Some(side) = self.roster.get(player_id).map(|player| player.side) else {
            return false;
        };

        let changed = self.roster.edit(player_id, name, jersey);
        if changed {
            self.event_bus.publish(SessionEvent::RosterChanged { side });
        }
        changed
    }

    /// Remove a player from the roster. Their plays stay in the log.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let removed = self.roster.remove(player_id)?;
        if self.selected == Some(player_id) {
            self.clear_selection();
        }

        self.event_bus.publish(SessionEvent::RosterChanged { side: removed.side });
        Some(removed)
    }

    pub fn reorder_players(&mut self, side: Side, from: usize, to: usize) -> bool {
        let changed = self.roster.reorder(side, from, to);
        if changed && from != to {
            self.event_bus.publish(SessionEvent::RosterChanged { side });
        }
        changed
    }

    pub fn box_score(&self) -> Vec<PlayerStats> {
        StatsAggregator::player_stats(self.log.plays(), self.roster.all())
    }

    /// Home then away team totals.
    pub fn team_stats(&self) -> [TeamStats; 2] {
        let box_score = self.box_score();
        Side::BOTH.map(|side| StatsAggregator::team_stats(side, self.log.score(side), &box_score))
    }

    pub fn leaderboard(&self, metric: LeaderboardMetric) -> Vec<PlayerStats> {
        StatsAggregator::leaderboard(&self.box_score(), metric)
    }

    pub fn export(&self, format: ExportFormat) -> Result<ExportFile, ExportError> {
        PlayExporter::render_local(self.log.plays(), format)
    }

    pub fn export_in<Tz: TimeZone>(&self, format: ExportFormat, tz: &Tz) -> Result<ExportFile, ExportError>
    where
        Tz::Offset: std::fmt::Display,
    {
        PlayExporter::render(self.log.plays(), format, tz)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
