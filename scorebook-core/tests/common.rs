#![allow(dead_code)]

use scorebook_core::{GameSession, Roster, SessionEvent, SessionEventHandler, SessionSettings};
use scorebook_types::{ActionType, JerseyNumber, PlayId, Player, PlayerId, Side};
use std::cell::RefCell;
use std::rc::Rc;

/// Creates a session with the two demo rosters
pub fn create_sample_session() -> GameSession {
    GameSession::with_roster(SessionSettings::default(), Roster::sample())
}

/// Creates a session with one home and one away player
pub fn create_two_player_session() -> (GameSession, PlayerId, PlayerId) {
    let mut session = GameSession::default();
    let home = session.add_player(Side::Home, "Stephen Curry", Some(JerseyNumber::Number(30)));
    let away = session.add_player(Side::Away, "LeBron James", Some(JerseyNumber::Number(23)));
    (session, home, away)
}

/// Finds a rostered player by display name
pub fn player_by_name<'a>(session: &'a GameSession, name: &str) -> &'a Player {
    session
        .roster()
        .all()
        .find(|player| player.name == name)
        .unwrap_or_else(|| panic!("no player named {}", name))
}

/// Selects a player and records one action against them
pub fn record(session: &mut GameSession, player_id: PlayerId, action: ActionType) -> PlayId {
    assert!(session.select_player(player_id), "player {} not on roster", player_id);
    session
        .record_action(action)
        .expect("recording with a selected player always yields a play")
}

/// Asserts both running scores equal the sums of the plays in the log
pub fn assert_scores_match_log(session: &GameSession) {
    for side in Side::BOTH {
        let expected: u32 = session
            .plays()
            .iter()
            .filter(|play| play.side == side)
            .map(|play| play.points)
            .sum();
        assert_eq!(
            session.scoreboard().score(side),
            expected,
            "{} score drifted from its plays",
            side
        );
    }
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<SessionEvent> {
        self.events.borrow().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.borrow().len()
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: &SessionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
