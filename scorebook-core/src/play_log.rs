use chrono::{DateTime, Utc};
use scorebook_types::{ActionDefinition, Play, PlayId, Player, Side};
use tracing::{debug, info};

use crate::ActionCatalog;

/// Everything an undo or redo step restores.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub plays: Vec<Play>,
    pub home_score: u32,
    pub away_score: u32,
}

/// The play-by-play log with running scores and snapshot undo/redo.
///
/// Plays are stored newest first. Every mutation pushes the full prior
/// state onto the undo stack and discards any redo branch; undo and redo
/// swap whole snapshots, so scores are never patched across history steps.
#[derive(Debug, Clone, Default)]
pub struct PlayLog {
    plays: Vec<Play>,
    home_score: u32,
    away_score: u32,
    undo_stack: Vec<GameSnapshot>,
    redo_stack: Vec<GameSnapshot>,
    history_limit: Option<usize>,
}

impl PlayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `limit` undo steps, forgetting the oldest first. A limit
    /// of 0 keeps every step.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history_limit: (limit > 0).then_some(limit),
            ..Self::default()
        }
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn find_play(&self, play_id: PlayId) -> Option<&Play> {
        self.plays.iter().find(|play| play.id == play_id)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            plays: self.plays.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
        }
    }

    /// Record an action for a player now.
    pub fn record(&mut self, player: &Player, action: &ActionDefinition) -> PlayId {
        self.record_at(player, action, Utc::now())
    }

    pub fn record_at(&mut self, player: &Player, action: &ActionDefinition, timestamp: DateTime<Utc>) -> PlayId {
        self.checkpoint();

        let play = Play::new(player, action.label, action.credited_points(), timestamp);
        let play_id = play.id;

        if play.points > 0 {
            *self.score_mut(play.side) += play.points;
        }

        info!(
            "Recorded {} for {} ({}), score {}-{}",
            play.action(), play.player_name, play.side, self.home_score, self.away_score
        );
        self.plays.insert(0, play);
        play_id
    }

    /// Step back one mutation. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };

        self.redo_stack.push(self.snapshot());
        self.restore(previous);
        debug!("Undo: {} plays, score {}-{}", self.plays.len(), self.home_score, self.away_score);
        true
    }

    /// Re-apply the most recently undone mutation.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };

        let current = self.snapshot();
        self.push_undo(current);
        self.restore(next);
        debug!("Redo: {} plays, score {}-{}", self.plays.len(), self.home_score, self.away_score);
        true
    }

    /// Rewrite a play's player name and action label. Points come from the
    /// catalog entry with that exact label, or 0 for free text. Unknown ids
    /// leave the log untouched.
    pub fn edit_play(&mut self, play_id: PlayId, player_name: impl Into<String>, action_label: impl Into<String>) -> bool {
        if self.find_play(play_id).is_none() {
            debug!("Ignoring edit for unknown play {}", play_id);
            return false;
        }

        self.checkpoint();

        let action_label = action_label.into();
        let points = ActionCatalog::points_for_label(&action_label);
        if let Some(play) = self.plays.iter_mut().find(|play| play.id == play_id) {
            play.player_name = player_name.into();
            play.set_action(action_label, points);
        }

        // One edit can change any play's contribution, so rebuild both totals
        self.recompute_scores();
        info!("Edited play {}, score {}-{}", play_id, self.home_score, self.away_score);
        true
    }

    /// Remove a play. Unknown ids leave the log untouched.
    pub fn delete_play(&mut self, play_id: PlayId) -> Option<Play> {
        let index = self.plays.iter().position(|play| play.id == play_id)?;

        self.checkpoint();
        let removed = self.plays.remove(index);
        self.recompute_scores();

        info!(
            "Deleted {} by {}, score {}-{}",
            removed.action(), removed.player_name, self.home_score, self.away_score
        );
        Some(removed)
    }

    /// Sum of points credited to one side across the current log.
    pub fn points_for(&self, side: Side) -> u32 {
        self.plays
            .iter()
            .filter(|play| play.side == side)
            .map(|play| play.points)
            .sum()
    }

    fn recompute_scores(&mut self) {
        self.home_score = self.points_for(Side::Home);
        self.away_score = self.points_for(Side::Away);
    }

    fn score_mut(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Home => &mut self.home_score,
            Side::Away => &mut self.away_score,
        }
    }

    fn restore(&mut self, snapshot: GameSnapshot) {
        self.plays = snapshot.plays;
        self.home_score = snapshot.home_score;
        self.away_score = snapshot.away_score;
    }

    /// Save the current state before a new mutation and drop the redo branch.
    fn checkpoint(&mut self) {
        let current = self.snapshot();
        self.push_undo(current);
        self.redo_stack.clear();
    }

    fn push_undo(&mut self, snapshot: GameSnapshot) {
        self.undo_stack.push(snapshot);
        if let Some(limit) = self.history_limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
            }
        }
    }
}
