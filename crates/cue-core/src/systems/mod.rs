pub mod collision;
pub mod pockets;
pub mod rules;
pub mod step;

pub use rules::{ShotPhase, TurnRules, BALLS_PER_COLOR};
