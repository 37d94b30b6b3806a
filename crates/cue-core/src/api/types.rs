use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::ball::{BallRole, WallMask};

/// One of the two players at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// Terminal result of a game, fixed the moment the black ball drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winner: PlayerId,
    pub loser: PlayerId,
}

/// Observable things that happened during one tick, drained by the host
/// for sounds and effects. The rules have already consumed them, so
/// these carry no obligations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickEvent {
    /// A ball left the table through a pocket.
    BallPocketed { role: BallRole },
    /// A ball bounced off one or two cushion faces.
    CushionBounce { role: BallRole, mask: WallMask },
    /// The shot ended or a rule fired and the other player is up.
    TurnPassed { to: PlayerId },
    /// The black ball dropped; the table is frozen until reset.
    GameEnded { outcome: GameOutcome },
}

/// Render-facing dump of the table, serializable for bridge layers that
/// ferry state to a UI as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub balls: Vec<BallView>,
    pub red_count: u8,
    pub blue_count: u8,
    pub active_player: PlayerId,
    pub awaiting_cue_placement: bool,
    pub settled: bool,
    pub outcome: Option<GameOutcome>,
}

/// One ball as the renderer sees it.
#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub position: Vec2,
    pub role: BallRole,
    pub pocketed: bool,
}
