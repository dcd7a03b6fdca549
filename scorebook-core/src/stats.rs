use scorebook_types::{Play, Player, Side, StatEvent};
use serde::Serialize;
use std::collections::HashMap;

/// Leaderboards only ever show this many players.
pub const LEADERBOARD_SIZE: usize = 5;

/// Counting stats for one player or one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub points: u32,
    pub field_goals_made: u32,
    pub field_goals_attempted: u32,
    pub three_pointers_made: u32,
    pub three_pointers_attempted: u32,
    pub free_throws_made: u32,
    pub free_throws_attempted: u32,
    pub assists: u32,
    pub rebounds: u32,
    pub steals: u32,
    pub blocks: u32,
    pub turnovers: u32,
    pub fouls: u32,
}

impl StatLine {
    pub fn apply(&mut self, event: StatEvent) {
        match event {
            StatEvent::TwoPointMade => {
                self.points += 2;
                self.field_goals_made += 1;
                self.field_goals_attempted += 1;
            }
            StatEvent::ThreePointMade => {
                self.points += 3;
                self.field_goals_made += 1;
                self.field_goals_attempted += 1;
                self.three_pointers_made += 1;
                self.three_pointers_attempted += 1;
            }
            StatEvent::FreeThrowMade => {
                self.points += 1;
                self.free_throws_made += 1;
                self.free_throws_attempted += 1;
            }
            StatEvent::TwoPointMiss => self.field_goals_attempted += 1,
            StatEvent::ThreePointMiss => {
                self.field_goals_attempted += 1;
                self.three_pointers_attempted += 1;
            }
            StatEvent::FreeThrowMiss => self.free_throws_attempted += 1,
            StatEvent::Assist => self.assists += 1,
            StatEvent::Rebound => self.rebounds += 1,
            StatEvent::Steal => self.steals += 1,
            StatEvent::Block => self.blocks += 1,
            StatEvent::Turnover => self.turnovers += 1,
            StatEvent::Foul => self.fouls += 1,
        }
    }

    pub fn field_goal_percentage(&self) -> f64 {
        percentage(self.field_goals_made, self.field_goals_attempted)
    }

    pub fn three_point_percentage(&self) -> f64 {
        percentage(self.three_pointers_made, self.three_pointers_attempted)
    }

    pub fn free_throw_percentage(&self) -> f64 {
        percentage(self.free_throws_made, self.free_throws_attempted)
    }
}

impl std::ops::AddAssign for StatLine {
    fn add_assign(&mut self, other: Self) {
        self.points += other.points;
        self.field_goals_made += other.field_goals_made;
        self.field_goals_attempted += other.field_goals_attempted;
        self.three_pointers_made += other.three_pointers_made;
        self.three_pointers_attempted += other.three_pointers_attempted;
        self.free_throws_made += other.free_throws_made;
        self.free_throws_attempted += other.free_throws_attempted;
        self.assists += other.assists;
        self.rebounds += other.rebounds;
        self.steals += other.steals;
        self.blocks += other.blocks;
        self.turnovers += other.turnovers;
        self.fouls += other.fouls;
    }
}

/// made / attempted * 100, or exactly 0 when nothing was attempted.
pub fn percentage(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempted) * 100.0
    }
}

/// One decimal place, e.g. "33.3%".
pub fn format_percentage(value: f64) -> String {
    if value > 0.0 {
        format!("{:.1}%", value)
    } else {
        "0.0%".to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerStats {
    pub player: Player,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStats {
    pub side: Side,
    pub total_points: u32,
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
    pub free_throw_percentage: f64,
    #[serde(flatten)]
    pub totals: StatLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardMetric {
    Points,
    Assists,
    Rebounds,
}

impl LeaderboardMetric {
    pub fn value(&self, line: &StatLine) -> u32 {
        match self {
            LeaderboardMetric::Points => line.points,
            LeaderboardMetric::Assists => line.assists,
            LeaderboardMetric::Rebounds => line.rebounds,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "points" | "pts" => Some(LeaderboardMetric::Points),
            "assists" | "ast" => Some(LeaderboardMetric::Assists),
            "rebounds" | "reb" => Some(LeaderboardMetric::Rebounds),
            _ => None,
        }
    }
}

pub struct StatsAggregator;

impl StatsAggregator {
    /// Box score for every rostered player, in roster order. Plays by players
    /// who are no longer on the roster are skipped.
    pub fn player_stats<'a>(plays: &[Play], players: impl IntoIterator<Item = &'a Player>) -> Vec<PlayerStats> {
        let mut stats: Vec<PlayerStats> = players
            .into_iter()
            .map(|player| PlayerStats {
                player: player.clone(),
                line: StatLine::default(),
            })
            .collect();

        let index_by_player: HashMap<_, _> = stats
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.player.id, index))
            .collect();

        for play in plays {
            let (Some(&index), Some(event)) = (index_by_player.get(&play.player_id), play.stat()) else {
                continue;
            };
            stats[index].line.apply(event);
        }

        stats
    }

    /// Team totals for one side. Points come from the running score, which
    /// also counts scoring plays by players since removed from the roster.
    pub fn team_stats(side: Side, score: u32, player_stats: &[PlayerStats]) -> TeamStats {
        let mut totals = StatLine::default();
        for entry in player_stats.iter().filter(|entry| entry.player.side == side) {
            totals += entry.line;
        }

        TeamStats {
            side,
            total_points: score,
            field_goal_percentage: totals.field_goal_percentage(),
            three_point_percentage: totals.three_point_percentage(),
            free_throw_percentage: totals.free_throw_percentage(),
            totals,
        }
    }

    /// Top five players by a metric. The sort is stable, so ties keep roster
    /// order (home before away).
    pub fn leaderboard(player_stats: &[PlayerStats], metric: LeaderboardMetric) -> Vec<PlayerStats> {
        let mut ranked = player_stats.to_vec();
        ranked.sort_by(|a, b| metric.value(&b.line).cmp(&metric.value(&a.line)));
        ranked.truncate(LEADERBOARD_SIZE);
        ranked
    }
}
