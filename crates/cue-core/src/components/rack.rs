//! Initial ball placement for a fresh game.

use glam::Vec2;

use crate::components::ball::{Ball, BallRole};

/// Vertical overlap between rack rows. Successive rows nest into the gaps
/// of the row above, so they sit closer than one full diameter.
const ROW_NESTING: f32 = 4.0;

/// Balls per rack row, head row first. The cue ball is racked separately
/// below the pack.
const ROW_COUNTS: [usize; 5] = [5, 4, 3, 2, 1];

/// Lay out the 16-ball rack: the cue ball on the lower half of the table
/// and a five-row pack of object balls on the upper half.
///
/// Slot 0 is always the cue ball. Slot 11 (center of the three-ball row)
/// is the black; odd slots rack red and the remaining even slots blue,
/// giving seven of each color.
pub fn rack_layout(
    table_width: f32,
    table_height: f32,
    wall_thickness: f32,
    ball_diameter: f32,
) -> Vec<Ball> {
    let center_x = (table_width + 2.0 * wall_thickness) / 2.0;
    let center_y = table_height / 2.0;
    let head_row_y = center_y / 3.0;

    let mut balls = Vec::with_capacity(16);
    balls.push(Ball::new(Vec2::new(center_x, center_y * 1.5), BallRole::Cue));

    let mut slot = 1;
    for (row, &count) in ROW_COUNTS.iter().enumerate() {
        let y = head_row_y + row as f32 * (ball_diameter - ROW_NESTING);
        for i in 0..count {
            let x = center_x + (i as f32 - (count as f32 - 1.0) / 2.0) * ball_diameter;
            balls.push(Ball::new(Vec2::new(x, y), role_for_slot(slot)));
            slot += 1;
        }
    }

    balls
}

/// Role by rack slot, mirroring the fixed seating of the physical rack.
fn role_for_slot(slot: usize) -> BallRole {
    match slot {
        0 => BallRole::Cue,
        11 => BallRole::Black,
        s if s % 2 == 1 => BallRole::Red,
        _ => BallRole::Blue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rack() -> Vec<Ball> {
        rack_layout(400.0, 580.0, 25.0, 30.0)
    }

    #[test]
    fn rack_has_sixteen_balls_with_fixed_role_split() {
        let balls = rack();
        assert_eq!(balls.len(), 16);
        let count = |role| balls.iter().filter(|b| b.role() == role).count();
        assert_eq!(count(BallRole::Cue), 1);
        assert_eq!(count(BallRole::Black), 1);
        assert_eq!(count(BallRole::Red), 7);
        assert_eq!(count(BallRole::Blue), 7);
    }

    #[test]
    fn cue_is_slot_zero_and_black_centers_the_third_row() {
        let balls = rack();
        assert_eq!(balls[0].role(), BallRole::Cue);
        assert_eq!(balls[11].role(), BallRole::Black);
        // Black sits on the rack's center line.
        assert_eq!(balls[11].position.x, balls[0].position.x);
    }

    #[test]
    fn all_positions_distinct_and_inside_the_playfield() {
        let balls = rack();
        let min = Vec2::new(25.0, 25.0);
        let max = Vec2::new(425.0, 605.0);
        for (i, a) in balls.iter().enumerate() {
            assert!(a.position.x > min.x && a.position.x < max.x, "ball {} x out of bounds", i);
            assert!(a.position.y > min.y && a.position.y < max.y, "ball {} y out of bounds", i);
            for b in &balls[i + 1..] {
                assert!(
                    a.position.distance(b.position) > 1.0,
                    "balls {} and {:?} overlap",
                    i,
                    b.position
                );
            }
        }
    }

    #[test]
    fn everything_starts_at_rest() {
        assert!(rack().iter().all(|b| b.velocity == Vec2::ZERO && !b.is_pocketed()));
    }
}
