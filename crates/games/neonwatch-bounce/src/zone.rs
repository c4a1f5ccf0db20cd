use serde::{Deserialize, Serialize};

use crate::arena::{Arena, Vec2};

/// Rectangular goal that rides around the containing circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoringZone {
    /// Current angle on the circle (radians, unbounded).
    pub angle: f32,
    /// Rotation per tick (radians).
    pub angular_velocity: f32,
    pub width: f32,
    pub height: f32,
    /// Center of the footprint, derived from `angle`.
    pub position: Vec2,
}

impl ScoringZone {
    pub fn new(arena: &Arena, angle: f32, angular_velocity: f32, width: f32, height: f32) -> Self {
        Self {
            angle,
            angular_velocity,
            width,
            height,
            position: arena.point_at(angle),
        }
    }

    /// Rotate by one tick and recompute the footprint center. The angle is
    /// never wrapped; cos/sin handle the periodicity.
    pub fn advance(&mut self, arena: &Arena) {
        self.angle += self.angular_velocity;
        self.position = arena.point_at(self.angle);
    }

    /// Strict axis-aligned containment test of a point.
    pub fn contains(&self, p: Vec2) -> bool {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        p.x > self.position.x - half_w
            && p.x < self.position.x + half_w
            && p.y > self.position.y - half_h
            && p.y < self.position.y + half_h
    }
}
