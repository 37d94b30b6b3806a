//! Ball-to-ball elastic impulse resolution.

use crate::components::ball::Ball;

/// Resolve every touching, approaching pair of on-table balls once.
/// Pairs are visited unordered (`i < j`); a ball sunk earlier in the tick
/// is skipped, so a mid-motion pocketing cannot feed stale contacts into
/// the remaining checks.
pub fn resolve_collisions(balls: &mut [Ball], ball_radius: f32) {
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (head, tail) = balls.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if a.is_pocketed() || b.is_pocketed() {
                continue;
            }
            if a.position.distance(b.position) <= 2.0 * ball_radius {
                resolve_pair(a, b);
            }
        }
    }
}

/// 1-D elastic impulse exchange along the line of centers. For unit
/// masses this swaps the normal velocity components and conserves
/// momentum exactly.
///
/// The impulse is committed only while the pair is still approaching:
/// if one more step at the current velocities would not bring the
/// centers closer, the balls are separating and the contact is stale.
fn resolve_pair(a: &mut Ball, b: &mut Ball) {
    let normal = (a.position - b.position).normalize_or_zero();
    let impulse = b.velocity.dot(normal) - a.velocity.dot(normal);

    let gap_now = a.position.distance(b.position);
    let gap_next = ((a.position - b.position) + (a.velocity - b.velocity)).length();
    if gap_now > gap_next {
        a.velocity += impulse * normal;
        b.velocity -= impulse * normal;
    }
}
