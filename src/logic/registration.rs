//! Registration of teams and players into a tournament.
//!
//! These operations depend on "today", which is passed in explicitly so the
//! registration-window and age checks stay deterministic under test.

use crate::models::{
    GenderCategory, GenderPolicy, Player, TeamHandle, Tournament, TournamentError,
};
use chrono::NaiveDate;

/// Register a team into the tournament.
///
/// Fails if a team with the same name is already registered, if `today` is
/// not strictly inside the registration window, or if the team's current
/// roster does not satisfy the tournament's gender policy. The policy is
/// checked only at this moment; later roster changes are not re-validated.
pub fn register_team(
    tournament: &mut Tournament,
    team: TeamHandle,
    today: NaiveDate,
) -> Result<(), TournamentError> {
    let name = team.borrow().name.clone();
    if tournament.find_team_by_name(&name).is_some() {
        return Err(TournamentError::DuplicateTeamName(name));
    }
    let window_open =
        tournament.registration_opens < today && today < tournament.registration_closes;
    if !window_open {
        return Err(TournamentError::RegistrationClosed);
    }
    if !roster_satisfies_policy(tournament.gender_policy, &team) {
        return Err(TournamentError::GenderPolicyViolation);
    }
    log::debug!("team {} registered in {}", name, tournament.name);
    tournament.stats.push(team.borrow().stats.clone());
    tournament.teams.push(team);
    Ok(())
}

/// Register a player into a team under the tournament's rules.
///
/// Fails if `today` is past the registration close date (the close date
/// itself is still valid), if the player would exceed the tournament's age
/// limit at its start date, or if a player with the same (first, last) name
/// pair is already registered on any team of the tournament. Within-team
/// uniqueness is re-checked by the team itself.
pub fn register_player(
    tournament: &Tournament,
    team: &TeamHandle,
    player: Player,
    today: NaiveDate,
) -> Result<(), TournamentError> {
    if today > tournament.registration_closes {
        return Err(TournamentError::RegistrationClosed);
    }
    let age = player.age_on(tournament.start_date);
    if tournament.age_limit != 0 && age > tournament.age_limit {
        return Err(TournamentError::AgeLimitExceeded {
            limit: tournament.age_limit,
            age,
        });
    }
    if tournament
        .find_player(&player.person.first_name, &player.person.last_name)
        .is_some()
    {
        return Err(TournamentError::DuplicatePlayerName);
    }
    team.borrow_mut().register_player(player)
}

/// Like [`register_player`], resolving the team by name first.
pub fn register_player_by_name(
    tournament: &Tournament,
    team_name: &str,
    player: Player,
    today: NaiveDate,
) -> Result<(), TournamentError> {
    let team = tournament
        .find_team_by_name(team_name)
        .ok_or_else(|| TournamentError::TeamNotFound(team_name.to_string()))?;
    register_player(tournament, &team, player, today)
}

/// All-members check against the tournament's gender policy. An empty roster
/// satisfies every policy.
fn roster_satisfies_policy(policy: GenderPolicy, team: &TeamHandle) -> bool {
    let team = team.borrow();
    match policy {
        GenderPolicy::Men => team
            .players
            .iter()
            .all(|p| p.gender == GenderCategory::Male),
        GenderPolicy::Women => team
            .players
            .iter()
            .all(|p| p.gender == GenderCategory::Female),
        GenderPolicy::Mixed => true,
    }
}
