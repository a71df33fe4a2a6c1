//! Player: identity plus birth date and gender category.

use crate::models::person::Person;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Gender category of a player, checked against a tournament's
/// [`GenderPolicy`](crate::models::tournament::GenderPolicy) at team registration.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenderCategory {
    Male,
    Female,
}

/// A player on a team's roster.
///
/// For uniqueness purposes a player's identity is the (first name, last name)
/// pair, not full [`Person`] equality: two entries with the same names are the
/// same player even if contact details differ.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub person: Person,
    pub birth_date: NaiveDate,
    pub gender: GenderCategory,
}

impl Player {
    pub fn new(person: Person, birth_date: NaiveDate, gender: GenderCategory) -> Self {
        Self {
            person,
            birth_date,
            gender,
        }
    }

    /// Whether this player and `other` carry the same (first, last) name pair.
    pub fn same_name(&self, other: &Player) -> bool {
        self.person.first_name == other.person.first_name
            && self.person.last_name == other.person.last_name
    }

    /// Age in whole years as of `date`. A birthday later in the year than
    /// `date`'s month/day has not happened yet and does not count.
    pub fn age_on(&self, date: NaiveDate) -> u8 {
        let mut years = date.year() - self.birth_date.year();
        if (date.month(), date.day()) < (self.birth_date.month(), self.birth_date.day()) {
            years -= 1;
        }
        years.max(0) as u8
    }
}
