use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::{PlayerId, Side};

/// Number of players at the top of a side's order who count as starters.
pub const STARTERS_PER_SIDE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub side: Side,
    pub order: usize, // 0-4 starters, 5+ bench
    pub jersey: Option<JerseyNumber>,
}

impl Player {
    pub fn is_starter(&self) -> bool {
        self.order < STARTERS_PER_SIDE
    }
}

/// Jersey labels are usually numbers, but some leagues print "00" or letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum JerseyNumber {
    Number(u32),
    Label(String),
}

impl JerseyNumber {
    /// Numeric input becomes `Number` unless it carries a leading zero ("00", "07").
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim().trim_start_matches('#');
        if raw.is_empty() {
            return None;
        }

        match raw.parse::<u32>() {
            Ok(number) if !(raw.len() > 1 && raw.starts_with('0')) => Some(JerseyNumber::Number(number)),
            _ => Some(JerseyNumber::Label(raw.to_string())),
        }
    }
}

impl From<u32> for JerseyNumber {
    fn from(number: u32) -> Self {
        JerseyNumber::Number(number)
    }
}

impl fmt::Display for JerseyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JerseyNumber::Number(number) => write!(f, "{}", number),
            JerseyNumber::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jersey_parsing() {
        assert_eq!(JerseyNumber::parse("30"), Some(JerseyNumber::Number(30)));
        assert_eq!(JerseyNumber::parse("#0"), Some(JerseyNumber::Number(0)));
        assert_eq!(JerseyNumber::parse("00"), Some(JerseyNumber::Label("00".to_string())));
        assert_eq!(JerseyNumber::parse("C"), Some(JerseyNumber::Label("C".to_string())));
        assert_eq!(JerseyNumber::parse("  "), None);
    }

    #[test]
    fn test_jersey_display() {
        assert_eq!(JerseyNumber::Number(23).to_string(), "23");
        assert_eq!(JerseyNumber::Label("00".to_string()).to_string(), "00");
    }
}
