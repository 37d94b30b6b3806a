use glam::Vec2;

/// Geometry class of a pocket opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PocketKind {
    /// Round opening at a playfield corner; circular proximity test.
    Corner,
    /// Half-round opening flush with the east/west cushion. The physical
    /// mouth is a slot in the wall, so detection is an axis-aligned
    /// rectangle around the center rather than a circle.
    Side,
}

/// A scoring aperture. Six per table, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct Pocket {
    pub center: Vec2,
    pub kind: PocketKind,
}

impl Pocket {
    /// True when a ball centered at `position` is inside the capture zone.
    pub fn captures(
        &self,
        position: Vec2,
        ball_radius: f32,
        pocket_radius: f32,
        border_thickness: f32,
    ) -> bool {
        match self.kind {
            PocketKind::Corner => self.center.distance(position) <= ball_radius + pocket_radius,
            PocketKind::Side => {
                (position.x - self.center.x).abs() <= ball_radius + border_thickness
                    && (position.y - self.center.y).abs() <= pocket_radius
            }
        }
    }
}

/// The six pockets for a playfield spanning `min..max`: one at each corner
/// plus a side pocket halfway down the west and east cushions.
pub fn pocket_layout(min: Vec2, max: Vec2) -> [Pocket; 6] {
    let mid_y = (min.y + max.y) / 2.0;
    [
        Pocket { center: Vec2::new(min.x, min.y), kind: PocketKind::Corner },
        Pocket { center: Vec2::new(max.x, min.y), kind: PocketKind::Corner },
        Pocket { center: Vec2::new(min.x, max.y), kind: PocketKind::Corner },
        Pocket { center: Vec2::new(max.x, max.y), kind: PocketKind::Corner },
        Pocket { center: Vec2::new(min.x, mid_y), kind: PocketKind::Side },
        Pocket { center: Vec2::new(max.x, mid_y), kind: PocketKind::Side },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALL_RADIUS: f32 = 15.0;
    const POCKET_RADIUS: f32 = 25.0;
    const BORDER: f32 = 2.0;

    fn corner() -> Pocket {
        Pocket { center: Vec2::new(25.0, 25.0), kind: PocketKind::Corner }
    }

    fn side() -> Pocket {
        Pocket { center: Vec2::new(25.0, 315.0), kind: PocketKind::Side }
    }

    #[test]
    fn corner_capture_is_circular() {
        let p = corner();
        let reach = BALL_RADIUS + POCKET_RADIUS;
        let inside = p.center + Vec2::new(reach - 0.5, 0.0);
        let outside = p.center + Vec2::new(reach + 0.5, 0.0);
        assert!(p.captures(inside, BALL_RADIUS, POCKET_RADIUS, BORDER));
        assert!(!p.captures(outside, BALL_RADIUS, POCKET_RADIUS, BORDER));
        // Diagonal at the same distance also captures: it is a circle.
        let diagonal = p.center + Vec2::splat((reach - 0.5) / 2f32.sqrt());
        assert!(p.captures(diagonal, BALL_RADIUS, POCKET_RADIUS, BORDER));
    }

    #[test]
    fn side_capture_is_rectangular() {
        let p = side();
        // Narrow in x (ball radius + border), tall in y (pocket radius).
        let near_wall = p.center + Vec2::new(BALL_RADIUS + BORDER - 0.5, 0.0);
        let off_wall = p.center + Vec2::new(BALL_RADIUS + BORDER + 0.5, 0.0);
        assert!(p.captures(near_wall, BALL_RADIUS, POCKET_RADIUS, BORDER));
        assert!(!p.captures(off_wall, BALL_RADIUS, POCKET_RADIUS, BORDER));

        let high = p.center + Vec2::new(0.0, POCKET_RADIUS - 0.5);
        let too_high = p.center + Vec2::new(0.0, POCKET_RADIUS + 0.5);
        assert!(p.captures(high, BALL_RADIUS, POCKET_RADIUS, BORDER));
        assert!(!p.captures(too_high, BALL_RADIUS, POCKET_RADIUS, BORDER));
    }

    #[test]
    fn layout_places_six_pockets() {
        let min = Vec2::new(25.0, 25.0);
        let max = Vec2::new(425.0, 605.0);
        let pockets = pocket_layout(min, max);
        let corners = pockets.iter().filter(|p| p.kind == PocketKind::Corner).count();
        let sides = pockets.iter().filter(|p| p.kind == PocketKind::Side).count();
        assert_eq!((corners, sides), (4, 2));
        // Side pockets sit at mid-height on each cushion.
        assert_eq!(pockets[4].center, Vec2::new(25.0, 315.0));
        assert_eq!(pockets[5].center, Vec2::new(425.0, 315.0));
    }
}
