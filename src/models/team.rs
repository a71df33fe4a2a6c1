//! Team: name, representative, roster of unique players, shared statistics.

use crate::models::person::Person;
use crate::models::player::Player;
use crate::models::stats::SharedStatistics;
use crate::models::tournament::TournamentError;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared-ownership handle to a [`Team`]. Held by the tournament that the
/// team is registered in and by every match the team takes part in.
pub type TeamHandle = Rc<RefCell<Team>>;

/// A team: non-blank name, a representative person, an append-ordered roster
/// of players unique by (first, last) name, and a shared statistics handle
/// injected at construction.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Team {
    pub name: String,
    pub representative: Person,
    pub players: Vec<Player>,
    pub stats: SharedStatistics,
}

impl Team {
    /// Create a team with an empty roster. The name must be non-blank.
    pub fn new(
        name: impl Into<String>,
        representative: Person,
        stats: SharedStatistics,
    ) -> Result<Self, TournamentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::BlankTeamName);
        }
        Ok(Self {
            name,
            representative,
            players: Vec::new(),
            stats,
        })
    }

    /// Wrap this team in a [`TeamHandle`] for registration and match play.
    pub fn into_handle(self) -> TeamHandle {
        Rc::new(RefCell::new(self))
    }

    /// Append a player to the roster. Fails if a player with the same
    /// (first, last) name pair is already on the team; append order is kept.
    pub fn register_player(&mut self, player: Player) -> Result<(), TournamentError> {
        if self.find_player(&player.person.first_name, &player.person.last_name).is_some() {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(player);
        Ok(())
    }

    /// Linear search of the roster by (first, last) name pair.
    pub fn find_player(&self, first_name: &str, last_name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.person.first_name == first_name && p.person.last_name == last_name)
    }

    /// One-line display summary: team name, counters, and point total.
    pub fn summary(&self) -> String {
        let stats = self.stats.borrow();
        format!(
            "Team {}: {} points ({} wins, {} draws, {} losses)",
            self.name, stats.points, stats.wins, stats.draws, stats.losses
        )
    }
}
