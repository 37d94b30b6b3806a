use glam::Vec2;
use serde::Deserialize;

use crate::api::types::{BallView, GameOutcome, PlayerId, TableSnapshot, TickEvent};
use crate::components::ball::{Ball, BallRole};
use crate::components::pocket::{pocket_layout, Pocket};
use crate::components::rack::rack_layout;
use crate::core::clock::friction_per_tick;
use crate::systems::rules::TurnRules;
use crate::systems::step;

/// Index of the cue ball in the rack; fixed by `rack_layout`.
const CUE: usize = 0;

/// Table dimensions and tuning. Deserializable with per-field defaults so
/// a host can ship a partial JSON config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Playfield width, excluding walls.
    pub width: f32,
    /// Playfield height, excluding walls.
    pub height: f32,
    pub wall_thickness: f32,
    pub ball_radius: f32,
    /// Painted rim around each ball; enters the side-pocket and cue
    /// placement tests.
    pub border_thickness: f32,
    pub pocket_radius: f32,
    /// Driver cadence the friction constant is normalized against.
    pub ticks_per_second: f32,
    /// Felt friction per second at the 100 Hz reference rate.
    pub friction_per_second: f32,
    /// Power constant of the square-root shot law.
    pub shot_power: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 580.0,
            wall_thickness: 25.0,
            ball_radius: 15.0,
            border_thickness: 2.0,
            pocket_radius: 25.0,
            ticks_per_second: 100.0,
            friction_per_second: 0.015,
            shot_power: 35.0,
        }
    }
}

impl TableConfig {
    /// Parse a config from JSON, with missing fields taking defaults and
    /// nonsense values corrected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<TableConfig>(json).map(TableConfig::validated)
    }

    /// Replace non-positive dimensions and rates with their defaults so a
    /// bad config can never divide by zero or invert the playfield.
    pub fn validated(mut self) -> Self {
        let defaults = TableConfig::default();
        if !(self.width > 0.0) {
            self.width = defaults.width;
        }
        if !(self.height > 0.0) {
            self.height = defaults.height;
        }
        if !(self.ball_radius > 0.0) {
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.pocket_radius > 0.0) {
            self.pocket_radius = defaults.pocket_radius;
        }
        if !(self.ticks_per_second > 0.0) {
            self.ticks_per_second = defaults.ticks_per_second;
        }
        self
    }

    pub fn ball_diameter(&self) -> f32 {
        2.0 * self.ball_radius
    }

    /// Top-left corner of the playfield interior.
    pub fn playfield_min(&self) -> Vec2 {
        Vec2::splat(self.wall_thickness)
    }

    /// Bottom-right corner of the playfield interior.
    pub fn playfield_max(&self) -> Vec2 {
        Vec2::new(
            self.wall_thickness + self.width,
            self.wall_thickness + self.height,
        )
    }

    /// Per-tick friction decrement; also the rest-detection threshold.
    pub fn friction_per_tick(&self) -> f32 {
        friction_per_tick(self.friction_per_second, self.ticks_per_second)
    }
}

/// The owned table aggregate: all sixteen balls, the six pockets, and the
/// turn state. Everything the UI layer needs goes through here; every
/// mutator is guarded and silently ignores requests that arrive at the
/// wrong time, so there are no errors for the host to handle.
pub struct Table {
    config: TableConfig,
    balls: Vec<Ball>,
    pockets: [Pocket; 6],
    rules: TurnRules,
    events: Vec<TickEvent>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let config = config.validated();
        let balls = rack_layout(
            config.width,
            config.height,
            config.wall_thickness,
            config.ball_diameter(),
        );
        let pockets = pocket_layout(config.playfield_min(), config.playfield_max());
        Self {
            config,
            balls,
            pockets,
            rules: TurnRules::new(),
            events: Vec::new(),
        }
    }

    /// Re-rack the balls and restart the game from player One.
    pub fn reset(&mut self) {
        self.balls = rack_layout(
            self.config.width,
            self.config.height,
            self.config.wall_thickness,
            self.config.ball_diameter(),
        );
        self.rules.reset();
        self.events.clear();
        log::info!("table reset");
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    // -- Render-facing queries --

    /// Positions and roles of every ball still on the table.
    pub fn ball_positions(&self) -> impl Iterator<Item = (Vec2, BallRole)> + '_ {
        self.balls
            .iter()
            .filter(|b| !b.is_pocketed())
            .map(|b| (b.position, b.role()))
    }

    /// The six fixed pocket centers.
    pub fn pocket_centers(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.pockets.iter().map(|p| p.center)
    }

    /// Full state dump for bridge layers.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    position: b.position,
                    role: b.role(),
                    pocketed: b.is_pocketed(),
                })
                .collect(),
            red_count: self.rules.count(BallRole::Red),
            blue_count: self.rules.count(BallRole::Blue),
            active_player: self.rules.active_player(),
            awaiting_cue_placement: self.needs_cue_placement(),
            settled: self.is_settled(),
            outcome: self.rules.outcome(),
        }
    }

    // -- Turn and score queries --

    pub fn current_player(&self) -> PlayerId {
        self.rules.active_player()
    }

    /// Balls of `role` pocketed so far (always 0 for Cue/Black).
    pub fn score_by_role(&self, role: BallRole) -> u8 {
        self.rules.count(role)
    }

    pub fn game_result(&self) -> Option<GameOutcome> {
        self.rules.outcome()
    }

    /// True after a scratch until the cue ball is successfully respotted.
    pub fn needs_cue_placement(&self) -> bool {
        self.rules.scratch_pending()
    }

    // -- Aiming and shooting --

    /// Grab the cue ball to start aiming. Accepted only while the whole
    /// table is at rest and `point` actually falls on the cue ball.
    pub fn set_cue_aim(&mut self, point: Vec2) {
        if !self.accepts_cue_input() {
            return;
        }
        let radius = self.config.ball_radius;
        let cue = &mut self.balls[CUE];
        if cue.position.distance(point) <= radius {
            cue.aim = Some(point);
        }
    }

    /// Drag the active aim to a new point. Ignored when no aim is active.
    pub fn update_cue_aim(&mut self, point: Vec2) {
        if !self.accepts_cue_input() {
            return;
        }
        let cue = &mut self.balls[CUE];
        if cue.is_aiming() {
            cue.aim = Some(point);
        }
    }

    /// The active aim point, for drawing the aim line.
    pub fn cue_aim(&self) -> Option<Vec2> {
        self.balls[CUE].aim
    }

    /// Release the shot: the cue ball is driven away from the aim point
    /// under the square-root power law, the aim clears, and the shot is
    /// marked in progress. A zero-length pull is a cancelled grab.
    pub fn shoot_cue(&mut self) {
        if !self.accepts_cue_input() {
            return;
        }
        let power = self.config.shot_power;
        let ticks = self.config.ticks_per_second;
        let cue = &mut self.balls[CUE];
        let Some(aim) = cue.aim.take() else {
            return;
        };
        let pull = cue.position - aim;
        if pull == Vec2::ZERO {
            return;
        }
        let speed = (power * pull.length() / ticks).sqrt();
        cue.velocity = speed * pull.normalize_or_zero();
        self.rules.on_shot_taken();
        log::debug!("shot released at speed {speed:.2}");
    }

    /// Validate and commit a manual cue-ball placement after a scratch.
    /// The point must keep the whole ball inside the cushions and stay
    /// clear of every other ball by at least a diameter plus the border.
    /// Returns whether the placement was accepted.
    pub fn place_cue_ball(&mut self, point: Vec2) -> bool {
        if !self.needs_cue_placement() || self.rules.game_over() || !self.is_settled() {
            return false;
        }

        let min = self.config.playfield_min();
        let max = self.config.playfield_max();
        let radius = self.config.ball_radius;
        let in_bounds = point.x > min.x + radius
            && point.x < max.x - radius
            && point.y > min.y + radius
            && point.y < max.y - radius;
        if !in_bounds {
            return false;
        }

        let clearance = self.config.ball_diameter() + self.config.border_thickness;
        let blocked = self
            .balls
            .iter()
            .filter(|b| !b.is_pocketed())
            .any(|b| b.position.distance(point) < clearance);
        if blocked {
            return false;
        }

        let cue = &mut self.balls[CUE];
        cue.position = point;
        cue.velocity = Vec2::ZERO;
        cue.pocketed = false;
        self.rules.consume_scratch();
        log::info!("cue ball respotted at {point:?}");
        true
    }

    // -- Simulation --

    /// Every ball at rest (or off the table).
    pub fn is_settled(&self) -> bool {
        step::settled(&self.balls, self.config.friction_per_tick())
    }

    /// Advance one fixed step and return what happened. A settled table
    /// is a no-op that reports nothing, so drivers may keep a timer
    /// firing without corrupting turn state.
    pub fn tick(&mut self) -> &[TickEvent] {
        self.events.clear();
        if self.is_settled() {
            return &self.events;
        }

        step::advance(
            &mut self.balls,
            &self.pockets,
            &self.config,
            &mut self.rules,
            &mut self.events,
        );

        if self.is_settled() {
            let shooter = self.rules.active_player();
            self.rules.on_table_settled();
            if self.rules.active_player() != shooter {
                self.events.push(TickEvent::TurnPassed { to: self.rules.active_player() });
            }
        }

        &self.events
    }

    /// Cue input is only meaningful between shots: table at rest, cue
    /// ball on the table, game still running.
    fn accepts_cue_input(&self) -> bool {
        self.is_settled() && !self.balls[CUE].is_pocketed() && !self.rules.game_over()
    }

    #[cfg(test)]
    pub(crate) fn balls_mut(&mut self) -> &mut Vec<Ball> {
        &mut self.balls
    }

    #[cfg(test)]
    pub(crate) fn rules_mut(&mut self) -> &mut TurnRules {
        &mut self.rules
    }
}
