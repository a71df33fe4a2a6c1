//! Match between two teams: schedule, venue, referees, scores, lifecycle.

use crate::models::referee::Referee;
use crate::models::team::TeamHandle;
use crate::models::tournament::TournamentError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where a match is held.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub city: String,
}

impl Venue {
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
        }
    }
}

/// Lifecycle state of a match.
///
/// `Pending` is the initial state. Playing a match at its scheduled minute
/// moves it through `InProgress` to `Finished`; playing it off-schedule
/// resets it to `Pending` (also from `Postponed`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    InProgress,
    Finished,
    Postponed,
}

/// A scheduled contest between a visitor and a home team.
///
/// The two team handles are fixed at construction. Duplicate detection when
/// registering into a tournament uses full structural equality, so two
/// matches differing only in score or status are distinct.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Match {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub venue: Venue,
    pub visitor: TeamHandle,
    pub home: TeamHandle,
    pub referees: Vec<Referee>,
    pub visitor_score: u32,
    pub home_score: u32,
    /// Human-readable outcome, set once the match finishes.
    pub result: Option<String>,
    pub status: MatchStatus,
}

impl Match {
    pub fn new(
        date: NaiveDate,
        time: NaiveTime,
        venue: Venue,
        visitor: TeamHandle,
        home: TeamHandle,
    ) -> Self {
        Self {
            date,
            time,
            venue,
            visitor,
            home,
            referees: Vec::new(),
            visitor_score: 0,
            home_score: 0,
            result: None,
            status: MatchStatus::Pending,
        }
    }

    /// Set both scores. No ordering validation and no state change; the
    /// scores only take effect on the standings when the match is played.
    pub fn set_scores(&mut self, visitor_score: u32, home_score: u32) {
        self.visitor_score = visitor_score;
        self.home_score = home_score;
    }

    /// Assign a referee. Fails if one with the same license is already
    /// assigned to this match.
    pub fn register_referee(&mut self, referee: Referee) -> Result<(), TournamentError> {
        if self.find_referee(&referee.license).is_some() {
            return Err(TournamentError::DuplicateReferee(referee.license));
        }
        self.referees.push(referee);
        Ok(())
    }

    /// Linear search of the assigned referees by license.
    pub fn find_referee(&self, license: &str) -> Option<&Referee> {
        self.referees.iter().find(|r| r.license == license)
    }

    /// Administrative schedule correction. The new date must be strictly
    /// after `today`; the lifecycle state is left unchanged.
    pub fn set_schedule(
        &mut self,
        date: NaiveDate,
        time: NaiveTime,
        today: NaiveDate,
    ) -> Result<(), TournamentError> {
        if date <= today {
            return Err(TournamentError::ScheduleDateNotFuture);
        }
        self.date = date;
        self.time = time;
        Ok(())
    }

    /// Postpone the match to a new date and time. The new date must be
    /// strictly after the current scheduled date; sets status `Postponed`.
    pub fn reschedule(&mut self, date: NaiveDate, time: NaiveTime) -> Result<(), TournamentError> {
        if date <= self.date {
            return Err(TournamentError::RescheduleDateNotLater);
        }
        self.date = date;
        self.time = time;
        self.status = MatchStatus::Postponed;
        Ok(())
    }
}
