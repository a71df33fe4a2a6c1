//! Data structures for the tournament: people, teams, matches, statistics.

mod game;
mod person;
mod player;
mod referee;
mod stats;
mod team;
mod tournament;

pub use game::{Match, MatchStatus, Venue};
pub use person::Person;
pub use player::{GenderCategory, Player};
pub use referee::Referee;
pub use stats::{SharedStatistics, Statistics};
pub use team::{Team, TeamHandle};
pub use tournament::{GenderPolicy, Tournament, TournamentCategory, TournamentError};
