//! # Roster Provider
//!
//! [`StatsProvider`] backed by the players in the loaded configuration.
//! Names match case-insensitively, ignoring surrounding whitespace.

use tennis_core::{Player, ProviderError, StatsProvider};

/// Case-folded, trimmed form of a player name. Roster validation and lookup
/// both compare names through this.
pub fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// In-memory roster.
#[derive(Debug, Clone)]
pub struct RosterProvider {
    players: Vec<Player>,
}

impl RosterProvider {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Roster names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(Player::name).collect()
    }
}

impl StatsProvider for RosterProvider {
    fn lookup(&self, name: &str) -> Result<Player, ProviderError> {
        let wanted = name.trim();
        let key = fold(wanted);
        self.players
            .iter()
            .find(|p| fold(p.name()) == key)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(wanted.to_string()))
    }

    fn provider_name(&self) -> &str {
        "roster"
    }
}
