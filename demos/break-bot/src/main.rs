//! Headless driver for cue-core: racks a table, plays a scripted break
//! and a few follow-up shots at a fixed tick rate, and logs what the
//! simulation reports. Stands in for the window/timer/mouse collaborators
//! of a real frontend.

use cue_core::{BallRole, Table, TableConfig, TickClock, TickEvent};
use glam::Vec2;

/// Frame delta fed to the tick clock, as a 60 Hz UI loop would.
const FRAME_DT: f32 = 1.0 / 60.0;

/// How hard the bot pulls back on every shot, in table units.
const PULL_LENGTH: f32 = 75.0;

fn main() {
    env_logger::init();

    let mut table = Table::new(TableConfig::default());
    log::info!("table racked; {:?} breaks", table.current_player());

    // Break: pull straight down-table so the cue ball drives into the pack.
    shoot(&mut table, Vec2::new(0.0, 90.0));
    run_until_settled(&mut table);

    for _ in 0..6 {
        if table.game_result().is_some() {
            break;
        }
        if table.needs_cue_placement() {
            respot_cue(&mut table);
        }
        let pull = pull_toward_nearest_ball(&table);
        shoot(&mut table, pull);
        run_until_settled(&mut table);
    }

    match serde_json::to_string_pretty(&table.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot failed to serialize: {err}"),
    }
}

/// Grab the cue ball, drag the aim out by `pull`, release.
fn shoot(table: &mut Table, pull: Vec2) {
    let Some(cue) = cue_position(table) else {
        log::warn!("no cue ball on the table to shoot");
        return;
    };
    table.set_cue_aim(cue);
    table.update_cue_aim(cue + pull);
    table.shoot_cue();
}

/// Drive ticks at the configured rate until the table comes to rest.
fn run_until_settled(table: &mut Table) {
    let mut clock = TickClock::new(table.config().ticks_per_second);
    while !table.is_settled() {
        for _ in 0..clock.accumulate(FRAME_DT) {
            for event in table.tick() {
                match event {
                    TickEvent::BallPocketed { role } => log::info!("{role:?} ball down"),
                    TickEvent::TurnPassed { to } => log::info!("{to:?} is up"),
                    TickEvent::GameEnded { outcome } => {
                        log::info!("game over: {:?} beats {:?}", outcome.winner, outcome.loser)
                    }
                    TickEvent::CushionBounce { .. } => {}
                }
            }
        }
        if clock.ticks() > 120_000 {
            log::error!("giving up: table did not settle");
            return;
        }
    }
    log::debug!("settled after {} ticks", clock.ticks());
}

/// Aim straight through the nearest object ball. Crude, but enough to
/// exercise collisions and the occasional pocket.
fn pull_toward_nearest_ball(table: &Table) -> Vec2 {
    let Some(cue) = cue_position(table) else {
        return Vec2::new(0.0, 60.0);
    };
    table
        .ball_positions()
        .filter(|(_, role)| *role != BallRole::Cue)
        .map(|(pos, _)| pos)
        .min_by(|a, b| a.distance(cue).total_cmp(&b.distance(cue)))
        .map(|target| (cue - target).normalize_or_zero() * PULL_LENGTH)
        .unwrap_or(Vec2::new(0.0, 60.0))
}

/// After a scratch, probe a grid of spots on the lower half of the table
/// until the placement validator accepts one.
fn respot_cue(table: &mut Table) {
    let min = table.config().playfield_min();
    let max = table.config().playfield_max();
    let mid_x = (min.x + max.x) / 2.0;
    for row in 0..5 {
        let y = max.y - 100.0 - row as f32 * 60.0;
        for dx in [0.0, -80.0, 80.0] {
            if table.place_cue_ball(Vec2::new(mid_x + dx, y)) {
                log::info!("cue ball back in play");
                return;
            }
        }
    }
    log::warn!("no clear spot found for the cue ball");
}

fn cue_position(table: &Table) -> Option<Vec2> {
    table
        .ball_positions()
        .find(|(_, role)| *role == BallRole::Cue)
        .map(|(pos, _)| pos)
}
