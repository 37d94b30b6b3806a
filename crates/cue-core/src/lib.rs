//! cue-core: headless two-player pocket-billiards simulation.
//!
//! Fixed-tick ball kinematics, an elastic pairwise collision model,
//! pocket detection, and the turn/scoring state machine, behind a single
//! owned [`Table`] aggregate. Rendering, input capture, and the shot
//! timer live in the host; they talk to the table through the guarded
//! mutators and read-only queries re-exported below.

pub mod api;
pub mod components;
pub mod core;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::table::{Table, TableConfig};
pub use api::types::{BallView, GameOutcome, PlayerId, TableSnapshot, TickEvent};
pub use components::ball::{Ball, BallRole, WallMask};
pub use components::pocket::{Pocket, PocketKind};
pub use core::clock::{friction_per_tick, TickClock, FRICTION_REFERENCE_RATE};
pub use systems::rules::{ShotPhase, TurnRules, BALLS_PER_COLOR};
