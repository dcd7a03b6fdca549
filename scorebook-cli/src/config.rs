use anyhow::{Context, Result};
use scorebook_core::SessionSettings;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub home_team: String,
    pub away_team: String,
    pub export_dir: PathBuf,
    pub history_limit: Option<usize>, // 0 or unset keeps every undo step
    pub sample_roster: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let history_limit = match lookup("SCOREBOOK_HISTORY_LIMIT") {
            Some(raw) => {
                let limit: usize = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid SCOREBOOK_HISTORY_LIMIT: {}", raw))?;
                (limit > 0).then_some(limit)
            }
            None => None,
        };

        let sample_roster: bool = match lookup("SCOREBOOK_SAMPLE_ROSTER") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid SCOREBOOK_SAMPLE_ROSTER: {}", raw))?,
            None => true,
        };

        Ok(Self {
            home_team: lookup("SCOREBOOK_HOME_TEAM").unwrap_or_else(|| "Warriors".to_string()),
            away_team: lookup("SCOREBOOK_AWAY_TEAM").unwrap_or_else(|| "Lakers".to_string()),
            export_dir: lookup("SCOREBOOK_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            history_limit,
            sample_roster,
        })
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            history_limit: self.history_limit,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home_team: "Warriors".to_string(),
            away_team: "Lakers".to_string(),
            export_dir: PathBuf::from("."),
            history_limit: None,
            sample_roster: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.home_team, "Warriors");
        assert_eq!(config.away_team, "Lakers");
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.history_limit, None);
        assert!(config.sample_roster);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("SCOREBOOK_HOME_TEAM", "Celtics"),
            ("SCOREBOOK_HISTORY_LIMIT", "50"),
            ("SCOREBOOK_SAMPLE_ROSTER", "false"),
            ("SCOREBOOK_EXPORT_DIR", "/tmp/exports"),
        ]))
        .unwrap();

        assert_eq!(config.home_team, "Celtics");
        assert_eq!(config.history_limit, Some(50));
        assert!(!config.sample_roster);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.session_settings().away_team, "Lakers");
    }

    #[test]
    fn test_zero_history_limit_means_unbounded() {
        let config = Config::from_lookup(lookup_from(&[("SCOREBOOK_HISTORY_LIMIT", "0")])).unwrap();
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_invalid_values() {
        let result = Config::from_lookup(lookup_from(&[("SCOREBOOK_HISTORY_LIMIT", "lots")]));
        assert!(result.unwrap_err().to_string().contains("Invalid SCOREBOOK_HISTORY_LIMIT"));

        let result = Config::from_lookup(lookup_from(&[("SCOREBOOK_SAMPLE_ROSTER", "yes")]));
        assert!(result.is_err());
    }
}
