//! Pocket detection pass.

use glam::Vec2;

use crate::components::ball::{Ball, BallRole};
use crate::components::pocket::Pocket;

/// Check every on-table ball against every pocket. A captured ball is
/// taken off the table in place (velocity zeroed, pocketed flag set) so
/// later passes in the same tick already skip it. Returns the roles
/// sunk, in ball order.
pub fn capture_pocketed(
    balls: &mut [Ball],
    pockets: &[Pocket],
    ball_radius: f32,
    pocket_radius: f32,
    border_thickness: f32,
) -> Vec<BallRole> {
    let mut sunk = Vec::new();
    for ball in balls.iter_mut() {
        if ball.is_pocketed() {
            continue;
        }
        let captured = pockets
            .iter()
            .any(|p| p.captures(ball.position, ball_radius, pocket_radius, border_thickness));
        if captured {
            ball.pocketed = true;
            ball.velocity = Vec2::ZERO;
            log::info!("{:?} ball pocketed", ball.role());
            sunk.push(ball.role());
        }
    }
    sunk
}
