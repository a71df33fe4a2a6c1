//! Playing a match: outcome determination and statistics recording.

use crate::models::{Match, MatchStatus, TeamHandle};
use chrono::{NaiveDateTime, Timelike};
use std::cmp::Ordering;

/// Play the match if `now` is its scheduled moment, matched to the minute
/// (seconds are ignored).
///
/// On the scheduled minute the match goes through `InProgress` to
/// `Finished`: the previously set scores decide the outcome, both teams'
/// statistics are updated through their shared handles, and a result summary
/// is produced. Off the scheduled minute the status becomes `Pending` (also
/// when it was `Postponed`) and nothing else changes.
///
/// Calling this twice at the scheduled minute double-records the outcome;
/// the caller must invoke it exactly once per real occurrence.
pub fn play(game: &mut Match, now: NaiveDateTime) {
    let at_kickoff = now.date() == game.date
        && now.time().hour() == game.time.hour()
        && now.time().minute() == game.time.minute();
    if !at_kickoff {
        game.status = MatchStatus::Pending;
        return;
    }

    game.status = MatchStatus::InProgress;
    let visitor_name = game.visitor.borrow().name.clone();
    let home_name = game.home.borrow().name.clone();
    let (vs, hs) = (game.visitor_score, game.home_score);

    let summary = match vs.cmp(&hs) {
        Ordering::Greater => {
            record(&game.visitor, true, false, false);
            record(&game.home, false, false, true);
            format!(
                "{} won with {} points and {} lost with {} points",
                visitor_name, vs, home_name, hs
            )
        }
        Ordering::Less => {
            record(&game.visitor, false, false, true);
            record(&game.home, true, false, false);
            format!(
                "{} lost with {} points and {} won with {} points",
                visitor_name, vs, home_name, hs
            )
        }
        Ordering::Equal => {
            record(&game.visitor, false, true, false);
            record(&game.home, false, true, false);
            format!(
                "{} drew with {} points against {} with {} points",
                visitor_name, vs, home_name, hs
            )
        }
    };

    log::debug!("match finished: {}", summary);
    game.result = Some(summary);
    game.status = MatchStatus::Finished;
}

fn record(team: &TeamHandle, won: bool, drawn: bool, lost: bool) {
    team.borrow().stats.borrow_mut().record_outcome(won, drawn, lost);
}
