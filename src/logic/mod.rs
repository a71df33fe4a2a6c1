//! Tournament business logic: registration, match play, derived views.

mod play;
mod registration;
mod standings;

pub use play::play;
pub use registration::{register_player, register_player_by_name, register_team};
pub use standings::{matches_for_referee, matches_for_team, standings_by_points};
