//! Derived views over a tournament: standings and match lists.

use crate::models::{Match, TeamHandle, Tournament};
use std::cmp::Reverse;

/// Snapshot of all registered teams ordered by points, highest first.
///
/// The sort is stable, so teams on equal points keep their registration
/// order; there is no secondary tie-break key.
pub fn standings_by_points(tournament: &Tournament) -> Vec<TeamHandle> {
    let mut teams = tournament.teams.clone();
    teams.sort_by_key(|t| Reverse(t.borrow().stats.borrow().points));
    teams
}

/// All matches in which the named team plays, on either side.
pub fn matches_for_team<'a>(tournament: &'a Tournament, name: &str) -> Vec<&'a Match> {
    tournament
        .matches
        .iter()
        .filter(|m| m.visitor.borrow().name == name || m.home.borrow().name == name)
        .collect()
}

/// All matches with at least one assigned referee holding the given license.
pub fn matches_for_referee<'a>(tournament: &'a Tournament, license: &str) -> Vec<&'a Match> {
    tournament
        .matches
        .iter()
        .filter(|m| m.referees.iter().any(|r| r.license == license))
        .collect()
}
