//! Per-team win/draw/loss counters and the derived point total.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared-ownership handle to a team's [`Statistics`].
///
/// The handle is held by the owning team and by any match that records an
/// outcome against it, so match play mutates the same counters the standings
/// read.
pub type SharedStatistics = Rc<RefCell<Statistics>>;

/// Running totals for one team. All counters start at zero.
///
/// `points` is derived: `wins*3 + draws*2 + losses*1`. Losses scoring one
/// point is the ruleset in force here, not a bug.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh counters behind a [`SharedStatistics`] handle.
    pub fn shared() -> SharedStatistics {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Record one match outcome. The first true flag wins: `won` shadows
    /// `drawn`, which shadows `lost`. With all flags false no counter moves,
    /// but the point total is still recomputed.
    pub fn record_outcome(&mut self, won: bool, drawn: bool, lost: bool) {
        if won {
            self.wins += 1;
        } else if drawn {
            self.draws += 1;
        } else if lost {
            self.losses += 1;
        }
        self.points = self.wins * 3 + self.draws * 2 + self.losses;
    }
}
