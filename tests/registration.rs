//! Integration tests for tournament construction and registration rules.

use chrono::NaiveDate;
use team_tournament::{
    register_player, register_player_by_name, register_team, GenderCategory, GenderPolicy, Match,
    Person, Player, Referee, Statistics, Team, TeamHandle, Tournament, TournamentCategory,
    TournamentError, Venue,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn person(first: &str, last: &str) -> Person {
    Person::new(first, last, format!("{first}.{last}@mail.test"), "3000000000")
}

fn player(first: &str, last: &str, gender: GenderCategory) -> Player {
    Player::new(person(first, last), date(2005, 6, 15), gender)
}

fn team(name: &str) -> TeamHandle {
    Team::new(name, person("Rep", name), Statistics::shared())
        .unwrap()
        .into_handle()
}

/// Registration open 2026-08-01 .. 2026-09-15, start 2026-10-01.
fn tournament(policy: GenderPolicy, age_limit: u8) -> Tournament {
    Tournament::new(
        "Copa Piston",
        date(2026, 10, 1),
        date(2026, 8, 1),
        date(2026, 9, 15),
        24,
        age_limit,
        0,
        TournamentCategory::Local,
        policy,
    )
    .unwrap()
}

/// A date inside the registration window.
fn mid_window() -> NaiveDate {
    date(2026, 8, 20)
}

#[test]
fn constructor_keeps_complete_data() {
    let t = tournament(GenderPolicy::Mixed, 0);
    assert_eq!(t.name, "Copa Piston");
    assert_eq!(t.start_date, date(2026, 10, 1));
    assert_eq!(t.registration_opens, date(2026, 8, 1));
    assert_eq!(t.registration_closes, date(2026, 9, 15));
    assert_eq!(t.max_participants, 24);
    assert_eq!(t.age_limit, 0);
    assert_eq!(t.entry_fee, 0);
    assert_eq!(t.category, TournamentCategory::Local);
    assert_eq!(t.gender_policy, GenderPolicy::Mixed);
    assert!(t.teams.is_empty() && t.referees.is_empty() && t.matches.is_empty());
}

#[test]
fn constructor_rejects_blank_name() {
    let result = Tournament::new(
        "  ",
        date(2026, 10, 1),
        date(2026, 8, 1),
        date(2026, 9, 15),
        24,
        0,
        0,
        TournamentCategory::Local,
        GenderPolicy::Mixed,
    );
    assert_eq!(result.unwrap_err(), TournamentError::BlankTournamentName);
}

#[test]
fn constructor_rejects_close_not_after_open() {
    for closes in [date(2026, 7, 1), date(2026, 8, 1)] {
        let result = Tournament::new(
            "Copa Piston",
            date(2026, 10, 1),
            date(2026, 8, 1),
            closes,
            24,
            0,
            0,
            TournamentCategory::Local,
            GenderPolicy::Mixed,
        );
        assert_eq!(result.unwrap_err(), TournamentError::InvalidRegistrationWindow);
    }
}

#[test]
fn constructor_rejects_start_inside_registration_window() {
    let result = Tournament::new(
        "Copa Piston",
        date(2026, 9, 1),
        date(2026, 8, 1),
        date(2026, 9, 15),
        24,
        0,
        0,
        TournamentCategory::Local,
        GenderPolicy::Mixed,
    );
    assert_eq!(result.unwrap_err(), TournamentError::InvalidStartDate);
}

#[test]
fn set_start_date_revalidates() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    assert_eq!(
        t.set_start_date(date(2026, 9, 15)),
        Err(TournamentError::InvalidStartDate)
    );
    t.set_start_date(date(2026, 11, 1)).unwrap();
    assert_eq!(t.start_date, date(2026, 11, 1));
}

#[test]
fn duplicate_team_name_is_rejected() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    register_team(&mut t, team("Tigres"), mid_window()).unwrap();
    assert_eq!(
        register_team(&mut t, team("Tigres"), mid_window()),
        Err(TournamentError::DuplicateTeamName("Tigres".into()))
    );
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn team_registration_requires_open_window() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    // Before the window, on either boundary, and after the window: all closed.
    for today in [
        date(2026, 7, 1),
        date(2026, 8, 1),
        date(2026, 9, 15),
        date(2026, 10, 20),
    ] {
        assert_eq!(
            register_team(&mut t, team("Tigres"), today),
            Err(TournamentError::RegistrationClosed)
        );
    }
    register_team(&mut t, team("Tigres"), mid_window()).unwrap();
}

#[test]
fn mens_tournament_accepts_all_male_roster() {
    let mut t = tournament(GenderPolicy::Men, 0);
    let tigres = team("Tigres");
    tigres
        .borrow_mut()
        .register_player(player("Juan", "Lopez", GenderCategory::Male))
        .unwrap();
    tigres
        .borrow_mut()
        .register_player(player("Pedro", "Rojas", GenderCategory::Male))
        .unwrap();
    register_team(&mut t, tigres, mid_window()).unwrap();
    assert_eq!(t.teams.len(), 1);
}

#[test]
fn mens_tournament_rejects_mixed_roster() {
    let mut t = tournament(GenderPolicy::Men, 0);
    let tigres = team("Tigres");
    tigres
        .borrow_mut()
        .register_player(player("Juan", "Lopez", GenderCategory::Male))
        .unwrap();
    tigres
        .borrow_mut()
        .register_player(player("Ana", "Rojas", GenderCategory::Female))
        .unwrap();
    assert_eq!(
        register_team(&mut t, tigres, mid_window()),
        Err(TournamentError::GenderPolicyViolation)
    );
    assert!(t.teams.is_empty());
}

#[test]
fn referee_licenses_are_unique_tournament_wide() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    t.register_referee(Referee::new(person("Sancho", "Panza"), "LIC-1").unwrap())
        .unwrap();
    t.register_referee(Referee::new(person("Paco", "Roco"), "LIC-2").unwrap())
        .unwrap();
    t.register_referee(Referee::new(person("Claudia", "Panzo"), "LIC-3").unwrap())
        .unwrap();
    assert_eq!(t.referees.len(), 3);

    let same_license = Referee::new(person("Otra", "Persona"), "LIC-2").unwrap();
    assert_eq!(
        t.register_referee(same_license),
        Err(TournamentError::DuplicateReferee("LIC-2".into()))
    );
    assert!(t.find_referee_by_license("LIC-3").is_some());
}

#[test]
fn referee_requires_a_license() {
    assert_eq!(
        Referee::new(person("Sancho", "Panza"), "  "),
        Err(TournamentError::BlankLicense)
    );
}

#[test]
fn player_names_are_unique_across_all_teams() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    register_team(&mut t, team("Tigres"), mid_window()).unwrap();
    register_team(&mut t, team("Rayo"), mid_window()).unwrap();

    register_player_by_name(
        &t,
        "Tigres",
        player("Juan", "Lopez", GenderCategory::Male),
        mid_window(),
    )
    .unwrap();
    // Same (first, last) pair on another team, different contact details.
    let clone = Player::new(
        Person::new("Juan", "Lopez", "other@mail.test", "3111111111"),
        date(2004, 2, 2),
        GenderCategory::Male,
    );
    assert_eq!(
        register_player_by_name(&t, "Rayo", clone, mid_window()),
        Err(TournamentError::DuplicatePlayerName)
    );
    assert!(t.find_player("Juan", "Lopez").is_some());
}

#[test]
fn player_names_are_unique_within_a_team() {
    let tigres = team("Tigres");
    tigres
        .borrow_mut()
        .register_player(player("Juan", "Lopez", GenderCategory::Male))
        .unwrap();
    assert_eq!(
        tigres
            .borrow_mut()
            .register_player(player("Juan", "Lopez", GenderCategory::Male)),
        Err(TournamentError::DuplicatePlayerName)
    );
    assert_eq!(tigres.borrow().players.len(), 1);
}

#[test]
fn player_registration_allowed_through_close_date() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    let tigres = team("Tigres");
    register_team(&mut t, tigres.clone(), mid_window()).unwrap();

    // The close date itself is still valid; the day after is not.
    register_player(
        &t,
        &tigres,
        player("Juan", "Lopez", GenderCategory::Male),
        date(2026, 9, 15),
    )
    .unwrap();
    assert_eq!(
        register_player(
            &t,
            &tigres,
            player("Pedro", "Rojas", GenderCategory::Male),
            date(2026, 9, 16),
        ),
        Err(TournamentError::RegistrationClosed)
    );
}

#[test]
fn age_limit_applies_at_tournament_start() {
    let mut t = tournament(GenderPolicy::Mixed, 20);
    let tigres = team("Tigres");
    register_team(&mut t, tigres.clone(), mid_window()).unwrap();

    // Born 2005-06-15: 21 at the 2026-10-01 start, over a limit of 20.
    assert_eq!(
        register_player(
            &t,
            &tigres,
            player("Juan", "Lopez", GenderCategory::Male),
            mid_window(),
        ),
        Err(TournamentError::AgeLimitExceeded { limit: 20, age: 21 })
    );

    // Born later in the year than the start date: still 20, admitted.
    let young = Player::new(person("Pedro", "Rojas"), date(2005, 12, 1), GenderCategory::Male);
    register_player(&t, &tigres, young, mid_window()).unwrap();
}

#[test]
fn zero_age_limit_means_unlimited() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    let tigres = team("Tigres");
    register_team(&mut t, tigres.clone(), mid_window()).unwrap();

    let veteran = Player::new(person("Abel", "Viejo"), date(1950, 1, 1), GenderCategory::Male);
    register_player(&t, &tigres, veteran, mid_window()).unwrap();
}

#[test]
fn registering_player_into_unknown_team_fails() {
    let t = tournament(GenderPolicy::Mixed, 0);
    assert_eq!(
        register_player_by_name(
            &t,
            "Fantasmas",
            player("Juan", "Lopez", GenderCategory::Male),
            mid_window(),
        ),
        Err(TournamentError::TeamNotFound("Fantasmas".into()))
    );
}

#[test]
fn duplicate_match_is_rejected_by_structural_equality() {
    let mut t = tournament(GenderPolicy::Mixed, 0);
    let rayo = team("Rayo");
    let tigres = team("Tigres");
    let venue = Venue::new("Camp Nou", "Pereira");
    let kickoff = chrono::NaiveTime::from_hms_opt(18, 30, 0).unwrap();

    let game = Match::new(date(2026, 10, 5), kickoff, venue.clone(), rayo.clone(), tigres.clone());
    t.register_match(game.clone()).unwrap();
    assert_eq!(t.register_match(game), Err(TournamentError::DuplicateMatch));

    // Differing in any field (here the score) makes it a distinct match.
    let mut rematch = Match::new(date(2026, 10, 5), kickoff, venue, rayo, tigres);
    rematch.set_scores(2, 1);
    t.register_match(rematch).unwrap();
    assert_eq!(t.matches.len(), 2);
}
