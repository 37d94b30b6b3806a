//! One fixed simulation tick over the whole table.
//!
//! Pass order inside a tick is fixed: integrate + cushion-reflect every
//! moving ball, then resolve ball pairs, then capture pocketed balls and
//! feed the turn rules. A ball sunk by the pocket pass is flagged in
//! place, so nothing later in the same tick (or in later ticks) can
//! collide with it again.

use crate::api::table::TableConfig;
use crate::api::types::TickEvent;
use crate::components::ball::Ball;
use crate::components::pocket::Pocket;
use crate::systems::collision;
use crate::systems::pockets;
use crate::systems::rules::TurnRules;

/// Advance the table by one tick, appending anything observable to
/// `events`. The caller is responsible for not calling this while the
/// table is already settled.
pub fn advance(
    balls: &mut [Ball],
    pockets: &[Pocket],
    config: &TableConfig,
    rules: &mut TurnRules,
    events: &mut Vec<TickEvent>,
) {
    let friction = config.friction_per_tick();
    let min = config.playfield_min();
    let max = config.playfield_max();

    for ball in balls.iter_mut() {
        if !ball.is_moving(friction) {
            continue;
        }
        ball.step(friction);
        let mask = ball.reflect_off_walls(min, max, config.ball_radius);
        if !mask.is_empty() {
            events.push(TickEvent::CushionBounce { role: ball.role(), mask });
        }
    }

    collision::resolve_collisions(balls, config.ball_radius);

    let mut was_over = rules.game_over();
    let sunk = pockets::capture_pocketed(
        balls,
        pockets,
        config.ball_radius,
        config.pocket_radius,
        config.border_thickness,
    );
    for role in sunk {
        events.push(TickEvent::BallPocketed { role });
        let shooter = rules.active_player();
        rules.on_ball_pocketed(role);
        if rules.active_player() != shooter {
            events.push(TickEvent::TurnPassed { to: rules.active_player() });
        }
        if !was_over {
            if let Some(outcome) = rules.outcome() {
                events.push(TickEvent::GameEnded { outcome });
                was_over = true;
            }
        }
    }
}

/// Every ball at rest or off the table.
pub fn settled(balls: &[Ball], friction_per_tick: f32) -> bool {
    balls.iter().all(|b| !b.is_moving(friction_per_tick))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::PlayerId;
    use crate::components::ball::BallRole;
    use crate::components::pocket::pocket_layout;
    use glam::Vec2;

    fn fixture() -> (TableConfig, [Pocket; 6], TurnRules) {
        let config = TableConfig::default();
        let pockets = pocket_layout(config.playfield_min(), config.playfield_max());
        (config, pockets, TurnRules::new())
    }

    #[test]
    fn north_wall_reflection_within_one_tick() {
        let (config, pockets, mut rules) = fixture();
        // One radius off the north cushion, heading straight at it.
        let mut balls = vec![Ball::new(Vec2::new(225.0, 55.0), BallRole::Cue)];
        balls[0].velocity = Vec2::new(0.0, -50.0);
        let mut events = Vec::new();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        assert!(balls[0].velocity.y > 0.0, "should have reflected");
        assert!(balls[0].is_moving(config.friction_per_tick()));
    }

    #[test]
    fn settle_happens_in_finite_ticks() {
        let (config, pockets, mut rules) = fixture();
        let mut balls = vec![Ball::new(Vec2::new(225.0, 300.0), BallRole::Cue)];
        balls[0].velocity = Vec2::new(3.0, 1.0);
        let friction = config.friction_per_tick();
        let mut events = Vec::new();
        let mut ticks = 0;
        while !settled(&balls, friction) {
            advance(&mut balls, &pockets, &config, &mut rules, &mut events);
            ticks += 1;
            assert!(ticks < 10_000, "table never settled");
        }
        assert!(balls[0].velocity.length() <= friction);
    }

    #[test]
    fn ball_rolling_into_a_corner_is_sunk_and_scored() {
        let (config, pockets, mut rules) = fixture();
        let mut balls = vec![Ball::new(Vec2::new(70.0, 70.0), BallRole::Red)];
        balls[0].velocity = Vec2::new(-20.0, -20.0);
        let mut events = Vec::new();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        assert!(balls[0].is_pocketed());
        assert!(events.contains(&TickEvent::BallPocketed { role: BallRole::Red }));
        assert_eq!(rules.count(BallRole::Red), 1);
    }

    #[test]
    fn pocket_driven_turn_pass_is_reported() {
        let (config, pockets, mut rules) = fixture();
        rules.on_shot_taken();
        let mut balls = vec![Ball::new(Vec2::new(70.0, 70.0), BallRole::Red)];
        balls[0].velocity = Vec2::new(-20.0, -20.0);
        let mut events = Vec::new();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        // Player One claimed red by sinking it, which passes the turn.
        assert!(events.contains(&TickEvent::TurnPassed { to: PlayerId::Two }));
    }

    #[test]
    fn ball_sunk_mid_tick_no_longer_collides() {
        let (config, pockets, mut rules) = fixture();
        // Red is inside the corner capture zone; the cue ball sits right
        // next to it, moving. The pocket pass of the PREVIOUS tick flags
        // red, so this tick's pair loop must ignore it.
        let mut balls = vec![
            Ball::new(Vec2::new(40.0, 40.0), BallRole::Red),
            Ball::new(Vec2::new(70.0, 40.0), BallRole::Cue),
        ];
        let mut events = Vec::new();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        assert!(balls[0].is_pocketed());

        balls[1].velocity = Vec2::new(-5.0, 0.0);
        let cue_speed = balls[1].velocity.length();
        events.clear();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        // The cue ball rolled through the sunk ball's spot unimpeded,
        // losing only friction.
        let expected = cue_speed - config.friction_per_tick();
        assert!((balls[1].velocity.length() - expected).abs() < 1e-4);
    }

    #[test]
    fn game_end_is_reported_once() {
        let (config, pockets, mut rules) = fixture();
        rules.on_shot_taken();
        let mut balls = vec![
            Ball::new(Vec2::new(40.0, 40.0), BallRole::Black),
            Ball::new(Vec2::new(415.0, 40.0), BallRole::Red),
        ];
        let mut events = Vec::new();
        advance(&mut balls, &pockets, &config, &mut rules, &mut events);
        let ends = events
            .iter()
            .filter(|e| matches!(e, TickEvent::GameEnded { .. }))
            .count();
        assert_eq!(ends, 1);
        assert!(rules.game_over());
        // The red that dropped in the same tick was ignored by the rules.
        assert_eq!(rules.count(BallRole::Red), 0);
    }
}
