use scorebook_types::{JerseyNumber, Player, PlayerId, STARTERS_PER_SIDE, Side};
use tracing::{debug, info};
use uuid::Uuid;

/// Ordered players for both sides. Each side's vector is kept in display
/// order, so a player's `order` always equals its index.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    home: Vec<Player>,
    away: Vec<Player>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two seven-player demo rosters for trying the scorebook out.
    pub fn sample() -> Self {
        let mut roster = Self::new();

        let home = [
            ("Stephen Curry", 30),
            ("Klay Thompson", 11),
            ("Draymond Green", 23),
            ("Andrew Wiggins", 22),
            ("Kevon Looney", 5),
            ("Jordan Poole", 3),
            ("Donte DiVincenzo", 0),
        ];
        let away = [
            ("LeBron James", 23),
            ("Anthony Davis", 3),
            ("Austin Reaves", 12),
            ("D'Angelo Russell", 1),
            ("Rui Hachimura", 28),
            ("Lonnie Walker IV", 4),
            ("Christian Wood", 35),
        ];

        for (name, number) in home {
            roster.add(Side::Home, name, Some(JerseyNumber::Number(number)));
        }
        for (name, number) in away {
            roster.add(Side::Away, name, Some(JerseyNumber::Number(number)));
        }

        roster
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<Player> {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Players of one side in display order.
    pub fn players(&self, side: Side) -> &[Player] {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn starters(&self, side: Side) -> &[Player] {
        let players = self.players(side);
        &players[..players.len().min(STARTERS_PER_SIDE)]
    }

    pub fn bench(&self, side: Side) -> &[Player] {
        let players = self.players(side);
        &players[players.len().min(STARTERS_PER_SIDE)..]
    }

    /// Home players followed by away players, each in display order.
    pub fn all(&self) -> impl Iterator<Item = &Player> {
        self.home.iter().chain(self.away.iter())
    }

    pub fn len(&self) -> usize {
        self.home.len() + self.away.len()
    }

    pub fn is_empty(&self) -> bool {
        self.home.is_empty() && self.away.is_empty()
    }

    pub fn get(&self, player_id: PlayerId) -> Option<&Player> {
        self.all().find(|player| player.id == player_id)
    }

    /// Append a player to the end of a side (first five become starters).
    pub fn add(&mut self, side: Side, name: impl Into<String>, jersey: Option<JerseyNumber>) -> PlayerId {
        let players = self.side_mut(side);
        let player = Player {
            id: Uuid::new_v4(),
            name: name.into(),
            side,
            order: players.len(),
            jersey,
        };
        let player_id = player.id;

        info!("Added {} to {} roster at position {}", player.name, side, player.order);
        players.push(player);
        player_id
    }

    pub fn edit(&mut self, player_id: PlayerId, name: impl Into<String>, jersey: Option<JerseyNumber>) -> bool {
        let Some(player) = self.home.iter_mut().chain(self.away.iter_mut()).find(|p| p.id == player_id) else {
            debug!("Ignoring edit for unknown player {}", player_id);
            return false;
        };

        player.name = name.into();
        player.jersey = jersey;
        true
    }

    /// Remove a player; the rest of that side closes ranks.
    pub fn remove(&mut self, player_id: PlayerId) -> Option<Player> {
        let side = self.get(player_id)?.side;
        let players = self.side_mut(side);
        let index = players.iter().position(|p| p.id == player_id)?;
        let removed = players.remove(index);
        Self::renumber(players);

        info!("Removed {} from {} roster", removed.name, side);
        Some(removed)
    }

    /// Drag-and-drop move: take the player at `from` and drop it at `to`,
    /// then reassign every order index on that side.
    pub fn reorder(&mut self, side: Side, from: usize, to: usize) -> bool {
        let players = self.side_mut(side);
        if from >= players.len() || to >= players.len() {
            debug!("Ignoring {} reorder {} -> {} (len {})", side, from, to, players.len());
            return false;
        }
        if from == to {
            return true;
        }

        let moved = players.remove(from);
        players.insert(to, moved);
        Self::renumber(players);
        true
    }

    fn renumber(players: &mut [Player]) {
        for (index, player) in players.iter_mut().enumerate() {
            player.order = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roster: &Roster, side: Side) -> Vec<&str> {
        roster.players(side).iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_add_assigns_order() {
        let mut roster = Roster::new();
        let first = roster.add(Side::Home, "Alice", None);
        let second = roster.add(Side::Home, "Bob", Some(JerseyNumber::Number(7)));
        roster.add(Side::Away, "Carol", None);

        assert_eq!(roster.get(first).unwrap().order, 0);
        assert_eq!(roster.get(second).unwrap().order, 1);
        assert_eq!(roster.players(Side::Away)[0].order, 0);
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_starters_and_bench() {
        let roster = Roster::sample();
        assert_eq!(roster.starters(Side::Home).len(), 5);
        assert_eq!(roster.bench(Side::Home).len(), 2);
        assert!(roster.starters(Side::Away).iter().all(Player::is_starter));
        assert!(!roster.bench(Side::Away).iter().any(Player::is_starter));

        let mut short = Roster::new();
        short.add(Side::Home, "Solo", None);
        assert_eq!(short.starters(Side::Home).len(), 1);
        assert!(short.bench(Side::Home).is_empty());
    }

    #[test]
    fn test_reorder_moves_and_renumbers() {
        let mut roster = Roster::new();
        for name in ["A", "B", "C", "D"] {
            roster.add(Side::Away, name, None);
        }

        assert!(roster.reorder(Side::Away, 3, 0));
        assert_eq!(names(&roster, Side::Away), vec!["D", "A", "B", "C"]);
        assert!(roster.reorder(Side::Away, 0, 2));
        assert_eq!(names(&roster, Side::Away), vec!["A", "B", "D", "C"]);

        let orders: Vec<usize> = roster.players(Side::Away).iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0, 1, 2, 3]);

        assert!(!roster.reorder(Side::Away, 0, 4));
        assert!(!roster.reorder(Side::Home, 0, 0));
    }

    #[test]
    fn test_edit_and_remove() {
        let mut roster = Roster::new();
        let a = roster.add(Side::Home, "A", None);
        let b = roster.add(Side::Home, "B", None);

        assert!(roster.edit(b, "Bee", Some(JerseyNumber::Label("00".to_string()))));
        assert_eq!(roster.get(b).unwrap().name, "Bee");
        assert!(!roster.edit(Uuid::new_v4(), "Nobody", None));

        let removed = roster.remove(a).unwrap();
        assert_eq!(removed.name, "A");
        assert_eq!(roster.get(b).unwrap().order, 0);
        assert!(roster.remove(a).is_none());
    }
}
