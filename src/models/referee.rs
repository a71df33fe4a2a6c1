//! Referee: identity plus a license string used as the uniqueness key.

use crate::models::person::Person;
use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

/// A match referee. Uniqueness within a tournament and within a match is by
/// `license`, never by name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Referee {
    pub person: Person,
    pub license: String,
}

impl Referee {
    /// Create a referee. The license is required and must be non-blank.
    pub fn new(person: Person, license: impl Into<String>) -> Result<Self, TournamentError> {
        let license = license.into();
        if license.trim().is_empty() {
            return Err(TournamentError::BlankLicense);
        }
        Ok(Self { person, license })
    }
}
