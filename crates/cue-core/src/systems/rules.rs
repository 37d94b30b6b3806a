//! Turn and scoring rules.
//!
//! The state machine is fed one event per pocketed ball while a shot is
//! rolling, plus shot-lifecycle notifications from the table. It never
//! touches ball physics; the table routes pocket events into it and reads
//! back whose shot is next.

use crate::api::types::{GameOutcome, PlayerId};
use crate::components::ball::BallRole;

/// Balls of one color a player must sink to be allowed to win.
pub const BALLS_PER_COLOR: u8 = 7;

/// Shot phase of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotPhase {
    /// Table at rest, waiting for the cue to be aimed and released.
    AwaitingShot,
    /// Balls rolling (or just stopped, pending end-of-shot resolution).
    ShotInProgress,
}

/// Turn/score state for one table. Reset together with the rack.
#[derive(Debug, Clone)]
pub struct TurnRules {
    active: PlayerId,
    /// Color owned by player One once assignment happens; player Two owns
    /// the rival color. `None` until the first color ball drops.
    player_one_color: Option<BallRole>,
    red_count: u8,
    blue_count: u8,
    /// Cue ball sunk and not yet respotted.
    scratch_pending: bool,
    phase: ShotPhase,
    /// Balls sunk since the current shot began.
    shot_pockets: u8,
    outcome: Option<GameOutcome>,
}

impl TurnRules {
    pub fn new() -> Self {
        Self {
            active: PlayerId::One,
            player_one_color: None,
            red_count: 0,
            blue_count: 0,
            scratch_pending: false,
            phase: ShotPhase::AwaitingShot,
            shot_pockets: 0,
            outcome: None,
        }
    }

    pub fn reset(&mut self) {
        *self = TurnRules::new();
    }

    // -- Queries --

    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    /// The color `player` must sink, once colors have been claimed.
    pub fn color_of(&self, player: PlayerId) -> Option<BallRole> {
        self.player_one_color.map(|color| match player {
            PlayerId::One => color,
            PlayerId::Two => color.rival_color(),
        })
    }

    pub fn count(&self, role: BallRole) -> u8 {
        match role {
            BallRole::Red => self.red_count,
            BallRole::Blue => self.blue_count,
            _ => 0,
        }
    }

    pub fn scratch_pending(&self) -> bool {
        self.scratch_pending
    }

    pub fn phase(&self) -> ShotPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }

    // -- Shot lifecycle --

    /// The cue ball has been released.
    pub fn on_shot_taken(&mut self) {
        self.phase = ShotPhase::ShotInProgress;
        self.shot_pockets = 0;
    }

    /// The table has come back to rest. A shot that sank nothing passes
    /// the turn to the opponent.
    pub fn on_table_settled(&mut self) {
        if self.phase != ShotPhase::ShotInProgress {
            return;
        }
        self.phase = ShotPhase::AwaitingShot;
        if self.shot_pockets == 0 && !self.game_over() {
            self.pass_turn();
        }
    }

    /// A successful cue-ball respot consumes the scratch.
    pub fn consume_scratch(&mut self) {
        self.scratch_pending = false;
    }

    // -- Pocketing events --

    /// Feed one pocketed ball. Events arriving after the game has ended
    /// are ignored; the black-ball transition is terminal.
    pub fn on_ball_pocketed(&mut self, role: BallRole) {
        if self.game_over() {
            return;
        }
        self.shot_pockets += 1;

        match role {
            BallRole::Black => self.finish_game(),
            BallRole::Red | BallRole::Blue => self.score_color(role),
            BallRole::Cue => {
                self.scratch_pending = true;
                self.pass_turn();
                log::info!("scratch: turn passes to {:?}", self.active);
            }
        }
    }

    /// Sinking the black ends the game on the spot: the shooter wins only
    /// with all seven of their color already down, and an unassigned
    /// shooter cannot have seven of anything.
    fn finish_game(&mut self) {
        let won = self
            .color_of(self.active)
            .map(|color| self.count(color) == BALLS_PER_COLOR)
            .unwrap_or(false);
        let outcome = if won {
            GameOutcome { winner: self.active, loser: self.active.opponent() }
        } else {
            GameOutcome { winner: self.active.opponent(), loser: self.active }
        };
        log::info!("black ball down: {:?} wins, {:?} loses", outcome.winner, outcome.loser);
        self.outcome = Some(outcome);
    }

    fn score_color(&mut self, role: BallRole) {
        match role {
            BallRole::Red => self.red_count += 1,
            BallRole::Blue => self.blue_count += 1,
            _ => unreachable!("score_color is only fed colors"),
        }

        // First color down claims that color for the shooter.
        if self.player_one_color.is_none() {
            self.player_one_color = Some(match self.active {
                PlayerId::One => role,
                PlayerId::Two => role.rival_color(),
            });
            log::info!("{:?} claims {:?}", self.active, role);
        }

        // House rule, inverted from conventional pool: dropping your OWN
        // color hands the table to the opponent, while dropping theirs
        // keeps you shooting.
        if self.color_of(self.active) == Some(role) {
            self.pass_turn();
        }
    }

    fn pass_turn(&mut self) {
        self.active = self.active.opponent();
    }
}

impl Default for TurnRules {
    fn default() -> Self {
        Self::new()
    }
}
