//! Axis-aligned collision tests and the vertical band classifier
//!
//! Pure queries only: nothing here mutates state or assigns rewards. The
//! tick loop decides what a hit means; this module just answers whether one
//! happened, always scanning in spawn order so the first match is the
//! deterministic tie-break winner.

use glam::Vec2;

use super::state::{ArrivedMarker, Log, Vehicle};
use crate::consts::*;

/// Axis-aligned rectangle, top-left origin, y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// AABB overlap test, exclusive on shared edges
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

/// The three vertical regions with distinct survival rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Goal,
    River,
    Road,
}

/// Classify a frog y-coordinate. The goal check runs first; the median rest
/// row and the start row fall outside every band and are always safe.
pub fn classify_band(y: f32) -> Option<Band> {
    if y < BAND_GOAL_MAX_Y {
        Some(Band::Goal)
    } else if y < BAND_RIVER_MAX_Y {
        Some(Band::River)
    } else if y > BAND_RIVER_MAX_Y && y < BAND_ROAD_MAX_Y {
        Some(Band::Road)
    } else {
        None
    }
}

/// First vehicle overlapping the frog, in spawn order
pub fn first_vehicle_hit<'a>(frog: &Rect, vehicles: &'a [Vehicle]) -> Option<&'a Vehicle> {
    vehicles.iter().find(|v| frog.intersects(&v.rect()))
}

/// First log under the frog, in spawn order
pub fn carrying_log<'a>(frog: &Rect, logs: &'a [Log]) -> Option<&'a Log> {
    logs.iter().find(|l| frog.intersects(&l.rect()))
}

/// Lowest-index free goal slot whose window contains the frog's x
pub fn matching_goal_slot(frog_x: f32, arrived: &[ArrivedMarker]) -> Option<usize> {
    ARRIVAL_POSITIONS.iter().enumerate().find_map(|(slot, &x)| {
        let in_window = (frog_x - x).abs() < ARRIVAL_TOLERANCE;
        let occupied = arrived.iter().any(|m| m.slot == slot);
        (in_window && !occupied).then_some(slot)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    fn vehicle_at(x: f32, y: f32) -> Vehicle {
        Vehicle {
            pos: Vec2::new(x, y),
            size: Vec2::new(55.0, 30.0),
            dir: Direction::Right,
            factor: 1.0,
        }
    }

    #[test]
    fn rects_touching_on_an_edge_do_not_intersect() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(30.0, 30.0));
        let b = Rect::new(Vec2::new(30.0, 0.0), Vec2::new(30.0, 30.0));
        assert!(!a.intersects(&b));

        let c = Rect::new(Vec2::new(29.0, 15.0), Vec2::new(30.0, 30.0));
        assert!(a.intersects(&c));
    }

    #[test]
    fn bands_cover_the_rows_they_should() {
        assert_eq!(classify_band(7.0), Some(Band::Goal));
        assert_eq!(classify_band(46.0), Some(Band::River));
        assert_eq!(classify_band(202.0), Some(Band::River));
        assert_eq!(classify_band(280.0), Some(Band::Road));
        assert_eq!(classify_band(436.0), Some(Band::Road));
        // median rest row and start row are safe
        assert_eq!(classify_band(241.0), None);
        assert_eq!(classify_band(475.0), None);
    }

    #[test]
    fn first_overlap_wins_in_spawn_order() {
        let frog = Rect::new(Vec2::new(100.0, 436.0), Vec2::splat(30.0));
        let vehicles = vec![vehicle_at(90.0, 436.0), vehicle_at(95.0, 436.0)];
        let hit = first_vehicle_hit(&frog, &vehicles).unwrap();
        assert_eq!(hit.pos.x, 90.0);
    }

    #[test]
    fn goal_slot_window_is_exclusive_and_skips_occupied() {
        // dead center of slot 2
        assert_eq!(matching_goal_slot(207.0, &[]), Some(2));
        // exactly on the tolerance edge misses
        assert_eq!(matching_goal_slot(207.0 + ARRIVAL_TOLERANCE, &[]), None);

        let taken = vec![ArrivedMarker {
            slot: 2,
            pos: Vec2::new(207.0, GOAL_ROW_Y),
        }];
        assert_eq!(matching_goal_slot(207.0, &taken), None);
    }
}
