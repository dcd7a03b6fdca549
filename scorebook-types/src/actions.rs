use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    // Offensive actions
    #[serde(rename = "2PT_MADE")]
    TwoPointMade,
    #[serde(rename = "2PT_MISSED")]
    TwoPointMissed,
    #[serde(rename = "3PT_MADE")]
    ThreePointMade,
    #[serde(rename = "3PT_MISSED")]
    ThreePointMissed,
    FreeThrowMade,
    FreeThrowMissed,
    Assist,
    Turnover,
    OffensiveRebound,
    // Defensive actions
    DefensiveRebound,
    Steal,
    Block,
    Foul,
    TechnicalFoul,
    FlagrantFoul,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Offensive,
    Defensive,
}

/// Catalog entries are `'static`, so definitions only travel outward.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ActionDefinition {
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub label: &'static str,
    pub category: ActionCategory,
    pub points: Option<u32>,
}

impl ActionDefinition {
    /// Points credited when this action is recorded (0 for non-scoring actions).
    pub fn credited_points(&self) -> u32 {
        self.points.unwrap_or(0)
    }
}
