//! Tournament: the aggregate root owning teams, referees, and matches.

use crate::models::game::Match;
use crate::models::player::Player;
use crate::models::referee::Referee;
use crate::models::stats::SharedStatistics;
use crate::models::team::TeamHandle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Errors from tournament, team, and match operations.
///
/// All of them are validation failures: a precondition on a mutating call was
/// not met. The call has no effect when one of these is returned.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament name is empty or whitespace.
    BlankTournamentName,
    /// Team name is empty or whitespace.
    BlankTeamName,
    /// Referee license is empty or whitespace.
    BlankLicense,
    /// Registration close date is not strictly after the open date.
    InvalidRegistrationWindow,
    /// Start date is not strictly after both registration dates.
    InvalidStartDate,
    /// A team with this name is already registered.
    DuplicateTeamName(String),
    /// A referee with this license is already registered (tournament or match).
    DuplicateReferee(String),
    /// A player with the same (first, last) name pair is already registered.
    DuplicatePlayerName,
    /// An equal match (full structural equality) is already registered.
    DuplicateMatch,
    /// The registration window is not open at the evaluation date.
    RegistrationClosed,
    /// The team's roster does not satisfy the tournament's gender policy.
    GenderPolicyViolation,
    /// The player would exceed the tournament's age limit at its start date.
    AgeLimitExceeded { limit: u8, age: u8 },
    /// No registered team carries the given name.
    TeamNotFound(String),
    /// New schedule date is not strictly after today.
    ScheduleDateNotFuture,
    /// Reschedule date is not strictly after the current match date.
    RescheduleDateNotLater,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::BlankTournamentName => write!(f, "Tournament name is required"),
            TournamentError::BlankTeamName => write!(f, "Team name is required"),
            TournamentError::BlankLicense => write!(f, "Referee license is required"),
            TournamentError::InvalidRegistrationWindow => {
                write!(f, "Registration must close after it opens")
            }
            TournamentError::InvalidStartDate => {
                write!(f, "Start date must be after both registration dates")
            }
            TournamentError::DuplicateTeamName(name) => {
                write!(f, "A team named {} is already registered", name)
            }
            TournamentError::DuplicateReferee(license) => {
                write!(f, "A referee with license {} is already registered", license)
            }
            TournamentError::DuplicatePlayerName => {
                write!(f, "A player with this name is already registered")
            }
            TournamentError::DuplicateMatch => write!(f, "This match is already registered"),
            TournamentError::RegistrationClosed => write!(f, "Registration is not open"),
            TournamentError::GenderPolicyViolation => {
                write!(f, "The roster does not satisfy the tournament's gender policy")
            }
            TournamentError::AgeLimitExceeded { limit, age } => {
                write!(f, "Player is {} at tournament start; the limit is {}", age, limit)
            }
            TournamentError::TeamNotFound(name) => {
                write!(f, "No team named {} is registered", name)
            }
            TournamentError::ScheduleDateNotFuture => {
                write!(f, "The new schedule date must be after today")
            }
            TournamentError::RescheduleDateNotLater => {
                write!(f, "The new date must be after the current match date")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Level of the competition.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentCategory {
    Local,
    Regional,
    National,
    World,
}

/// Constraint on roster composition checked when a team registers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderPolicy {
    /// Every roster member must be male.
    Men,
    /// Every roster member must be female.
    Women,
    /// No restriction.
    Mixed,
}

/// The aggregate root: configuration plus the registered teams, referees,
/// statistics handles, and matches. Entries are only ever appended.
#[derive(Clone, Debug)]
pub struct Tournament {
    pub name: String,
    pub start_date: NaiveDate,
    pub registration_opens: NaiveDate,
    pub registration_closes: NaiveDate,
    pub max_participants: u8,
    /// Maximum player age at the start date; 0 means unlimited.
    pub age_limit: u8,
    pub entry_fee: u32,
    pub category: TournamentCategory,
    pub gender_policy: GenderPolicy,
    pub teams: Vec<TeamHandle>,
    pub referees: Vec<Referee>,
    /// Statistics handles of the registered teams, in registration order.
    pub stats: Vec<SharedStatistics>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a tournament, validating every scalar up front: non-blank
    /// name, close strictly after open, start strictly after both
    /// registration dates. Counts and fee are unsigned, so the original
    /// non-negativity rules hold by construction.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        registration_opens: NaiveDate,
        registration_closes: NaiveDate,
        max_participants: u8,
        age_limit: u8,
        entry_fee: u32,
        category: TournamentCategory,
        gender_policy: GenderPolicy,
    ) -> Result<Self, TournamentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::BlankTournamentName);
        }
        if registration_closes <= registration_opens {
            return Err(TournamentError::InvalidRegistrationWindow);
        }
        if start_date <= registration_opens || start_date <= registration_closes {
            return Err(TournamentError::InvalidStartDate);
        }
        Ok(Self {
            name,
            start_date,
            registration_opens,
            registration_closes,
            max_participants,
            age_limit,
            entry_fee,
            category,
            gender_policy,
            teams: Vec::new(),
            referees: Vec::new(),
            stats: Vec::new(),
            matches: Vec::new(),
        })
    }

    /// Move the start date. It must still fall strictly after both
    /// registration dates.
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> Result<(), TournamentError> {
        if start_date <= self.registration_opens || start_date <= self.registration_closes {
            return Err(TournamentError::InvalidStartDate);
        }
        self.start_date = start_date;
        Ok(())
    }

    /// Register a referee. Fails if the license is already present
    /// tournament-wide.
    pub fn register_referee(&mut self, referee: Referee) -> Result<(), TournamentError> {
        if self.find_referee_by_license(&referee.license).is_some() {
            return Err(TournamentError::DuplicateReferee(referee.license));
        }
        log::debug!("referee {} registered in {}", referee.license, self.name);
        self.referees.push(referee);
        Ok(())
    }

    /// Register a match. Fails if an equal match (full structural equality)
    /// is already registered. No check that the two teams belong to this
    /// tournament.
    pub fn register_match(&mut self, game: Match) -> Result<(), TournamentError> {
        if self.matches.iter().any(|m| *m == game) {
            return Err(TournamentError::DuplicateMatch);
        }
        self.matches.push(game);
        Ok(())
    }

    /// Linear search of the registered teams by name.
    pub fn find_team_by_name(&self, name: &str) -> Option<TeamHandle> {
        self.teams
            .iter()
            .find(|t| t.borrow().name == name)
            .cloned()
    }

    /// Linear search of the registered referees by license.
    pub fn find_referee_by_license(&self, license: &str) -> Option<&Referee> {
        self.referees.iter().find(|r| r.license == license)
    }

    /// Search every registered team's roster for a player with the given
    /// (first, last) name pair.
    pub fn find_player(&self, first_name: &str, last_name: &str) -> Option<Player> {
        self.teams
            .iter()
            .find_map(|t| t.borrow().find_player(first_name, last_name).cloned())
    }
}
