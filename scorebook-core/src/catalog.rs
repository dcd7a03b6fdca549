use scorebook_types::{ActionCategory, ActionDefinition, ActionType};

/// The fixed set of actions a scorekeeper can record.
pub static ACTIONS: [ActionDefinition; 15] = [
    // Offensive actions
    action(ActionType::TwoPointMade, "2PT Made", ActionCategory::Offensive, Some(2)),
    action(ActionType::TwoPointMissed, "2PT Miss", ActionCategory::Offensive, None),
    action(ActionType::ThreePointMade, "3PT Made", ActionCategory::Offensive, Some(3)),
    action(ActionType::ThreePointMissed, "3PT Miss", ActionCategory::Offensive, None),
    action(ActionType::FreeThrowMade, "FT Made", ActionCategory::Offensive, Some(1)),
    action(ActionType::FreeThrowMissed, "FT Miss", ActionCategory::Offensive, None),
    action(ActionType::Assist, "Assist", ActionCategory::Offensive, None),
    action(ActionType::Turnover, "Turnover", ActionCategory::Offensive, None),
    action(ActionType::OffensiveRebound, "O Rebound", ActionCategory::Offensive, None),
    // Defensive actions
    action(ActionType::DefensiveRebound, "D Rebound", ActionCategory::Defensive, None),
    action(ActionType::Steal, "Steal", ActionCategory::Defensive, None),
    action(ActionType::Block, "Block", ActionCategory::Defensive, None),
    action(ActionType::Foul, "Foul", ActionCategory::Defensive, None),
    action(ActionType::TechnicalFoul, "Technical Foul", ActionCategory::Defensive, None),
    action(ActionType::FlagrantFoul, "Flagrant Foul", ActionCategory::Defensive, None),
];

const fn action(
    action_type: ActionType,
    label: &'static str,
    category: ActionCategory,
    points: Option<u32>,
) -> ActionDefinition {
    ActionDefinition {
        action_type,
        label,
        category,
        points,
    }
}

pub struct ActionCatalog;

impl ActionCatalog {
    pub fn all() -> &'static [ActionDefinition] {
        &ACTIONS
    }

    pub fn get(action_type: ActionType) -> &'static ActionDefinition {
        // Catalog rows follow ActionType declaration order
        &ACTIONS[action_type as usize]
    }

    /// Look up a definition by its exact display label.
    pub fn find_by_label(label: &str) -> Option<&'static ActionDefinition> {
        ACTIONS.iter().find(|definition| definition.label == label)
    }

    /// Points credited for a free-text label; labels outside the catalog score nothing.
    pub fn points_for_label(label: &str) -> u32 {
        Self::find_by_label(label)
            .map(ActionDefinition::credited_points)
            .unwrap_or(0)
    }

    pub fn by_category(category: ActionCategory) -> impl Iterator<Item = &'static ActionDefinition> {
        ACTIONS
            .iter()
            .filter(move |definition| definition.category == category)
    }

    /// Resolve the short codes typed at the console ("2pm", "dreb", ...) or a
    /// case-insensitive label.
    pub fn parse(input: &str) -> Option<&'static ActionDefinition> {
        let input = input.trim().to_lowercase();
        let action_type = match input.as_str() {
            "2pm" => ActionType::TwoPointMade,
            "2px" => ActionType::TwoPointMissed,
            "3pm" => ActionType::ThreePointMade,
            "3px" => ActionType::ThreePointMissed,
            "ftm" => ActionType::FreeThrowMade,
            "ftx" => ActionType::FreeThrowMissed,
            "ast" => ActionType::Assist,
            "tov" => ActionType::Turnover,
            "oreb" => ActionType::OffensiveRebound,
            "dreb" => ActionType::DefensiveRebound,
            "stl" => ActionType::Steal,
            "blk" => ActionType::Block,
            "pf" => ActionType::Foul,
            "tech" => ActionType::TechnicalFoul,
            "flagrant" => ActionType::FlagrantFoul,
            _ => {
                return ACTIONS
                    .iter()
                    .find(|definition| definition.label.to_lowercase() == input);
            }
        };

        Some(Self::get(action_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_types::StatEvent;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(ActionCatalog::all().len(), 15);
        assert_eq!(ActionCatalog::by_category(ActionCategory::Offensive).count(), 9);
        assert_eq!(ActionCatalog::by_category(ActionCategory::Defensive).count(), 6);

        for (index, definition) in ACTIONS.iter().enumerate() {
            assert_eq!(definition.action_type as usize, index);
            assert_eq!(ActionCatalog::get(definition.action_type), definition);
        }

        let scoring: Vec<u32> = ACTIONS.iter().filter_map(|a| a.points).collect();
        assert_eq!(scoring, vec![2, 3, 1]);
    }

    #[test]
    fn test_every_label_is_counted_by_stats() {
        for definition in ActionCatalog::all() {
            assert!(
                StatEvent::from_label(definition.label).is_some(),
                "label {} would not accrue stats",
                definition.label
            );
        }
    }

    #[test]
    fn test_points_for_label() {
        assert_eq!(ActionCatalog::points_for_label("3PT Made"), 3);
        assert_eq!(ActionCatalog::points_for_label("FT Made"), 1);
        assert_eq!(ActionCatalog::points_for_label("Steal"), 0);
        // Free text outside the catalog credits nothing, even if it looks like a make
        assert_eq!(ActionCatalog::points_for_label("3PT Made and-one"), 0);
    }

    #[test]
    fn test_parse_codes_and_labels() {
        assert_eq!(ActionCatalog::parse("3pm").map(|a| a.action_type), Some(ActionType::ThreePointMade));
        assert_eq!(ActionCatalog::parse("DREB").map(|a| a.action_type), Some(ActionType::DefensiveRebound));
        assert_eq!(ActionCatalog::parse("technical foul").map(|a| a.action_type), Some(ActionType::TechnicalFoul));
        assert!(ActionCatalog::parse("dunk").is_none());
    }
}
