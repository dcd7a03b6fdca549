use crate::{PlayId, Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    pub fn label(&self) -> &'static str {
        match self {
            Side::Home => "Home",
            Side::Away => "Away",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Box-score effect of a play, derived from its label text.
///
/// Label matching is substring based and the first rule wins, so "3PT Made
/// (and one)" still counts as a made three. A label that contains none of the
/// recognised fragments carries no stat at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum StatEvent {
    TwoPointMade,
    ThreePointMade,
    FreeThrowMade,
    TwoPointMiss,
    ThreePointMiss,
    FreeThrowMiss,
    Assist,
    Rebound,
    Steal,
    Block,
    Turnover,
    Foul,
}

impl StatEvent {
    const RULES: [(&'static str, StatEvent); 13] = [
        ("2PT Made", StatEvent::TwoPointMade),
        ("3PT Made", StatEvent::ThreePointMade),
        ("FT Made", StatEvent::FreeThrowMade),
        ("2PT Miss", StatEvent::TwoPointMiss),
        ("3PT Miss", StatEvent::ThreePointMiss),
        ("FT Miss", StatEvent::FreeThrowMiss),
        ("Assist", StatEvent::Assist),
        ("O Rebound", StatEvent::Rebound),
        ("D Rebound", StatEvent::Rebound),
        ("Steal", StatEvent::Steal),
        ("Block", StatEvent::Block),
        ("Turnover", StatEvent::Turnover),
        ("Foul", StatEvent::Foul),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        Self::RULES
            .iter()
            .find(|(fragment, _)| label.contains(fragment))
            .map(|(_, event)| *event)
    }
}

/// One logged play. The stat tag always follows the action label: it is set
/// from the label on construction, on `set_action` and on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Play {
    pub id: PlayId,
    pub player_id: PlayerId,
    pub player_name: String, // Copied at record time, replaced on edit
    action: String,
    pub side: Side,
    pub points: u32,
    pub timestamp: DateTime<Utc>,
    stat: Option<StatEvent>,
}

impl Play {
    pub fn new(player: &Player, label: impl Into<String>, points: u32, timestamp: DateTime<Utc>) -> Self {
        let action = label.into();
        Self {
            id: Uuid::new_v4(),
            player_id: player.id,
            player_name: player.name.clone(),
            stat: StatEvent::from_label(&action),
            action,
            side: player.side,
            points,
            timestamp,
        }
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn stat(&self) -> Option<StatEvent> {
        self.stat
    }

    /// Replace the action label and the points credited for it, keeping the
    /// stat tag in step with the new label.
    pub fn set_action(&mut self, label: impl Into<String>, points: u32) {
        self.action = label.into();
        self.stat = StatEvent::from_label(&self.action);
        self.points = points;
    }
}

/// Wire shape of a play. Any incoming `stat` is ignored and rebuilt from the label.
#[derive(Deserialize)]
struct PlayFields {
    id: PlayId,
    player_id: PlayerId,
    player_name: String,
    action: String,
    side: Side,
    points: u32,
    timestamp: DateTime<Utc>,
}

impl<'de> Deserialize<'de> for Play {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = PlayFields::deserialize(deserializer)?;
        Ok(Self {
            id: fields.id,
            player_id: fields.player_id,
            player_name: fields.player_name,
            stat: StatEvent::from_label(&fields.action),
            action: fields.action,
            side: fields.side,
            points: fields.points,
            timestamp: fields.timestamp,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scoreboard {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
}

impl Scoreboard {
    pub fn team_name(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }
}
