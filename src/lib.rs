//! Team sports tournament domain model: teams, players, referees, matches,
//! and standings, with registration rules enforced at every mutation.

pub mod logic;
pub mod models;

pub use logic::{
    matches_for_referee, matches_for_team, play, register_player, register_player_by_name,
    register_team, standings_by_points,
};
pub use models::{
    GenderCategory, GenderPolicy, Match, MatchStatus, Person, Player, Referee, SharedStatistics,
    Statistics, Team, TeamHandle, Tournament, TournamentCategory, TournamentError, Venue,
};
