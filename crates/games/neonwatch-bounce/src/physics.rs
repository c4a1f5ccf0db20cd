use serde::{Deserialize, Serialize};

use crate::arena::{Arena, Vec2};

/// A circular body (one of the two logos).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Body {
    pub const fn new(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Move by one tick of velocity.
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Hard bounce: reverse and amplify by `factor`, then damp.
    ///
    /// Both multiplications are kept separate so the result matches the
    /// two-stage update exactly.
    pub fn bounce(&mut self, factor: f32, damping: f32) {
        self.velocity = self.velocity.scale(factor).scale(damping);
    }

    /// Reflect off the containing circle. Returns true if the body touched it.
    ///
    /// A body whose center reaches `arena.radius - radius` is pulled back onto
    /// that inner radius along the same angle before the bounce.
    pub fn reflect_off_boundary(&mut self, arena: &Arena, factor: f32, damping: f32) -> bool {
        let limit = arena.radius - self.radius;
        if self.position.distance(arena.center) < limit {
            return false;
        }
        let angle = arena.angle_of(self.position);
        self.position = arena.point_at_radius(angle, limit);
        self.bounce(factor, damping);
        true
    }
}

/// Whether two bodies overlap.
pub fn bodies_touch(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Body-body contact. Both velocities get the bounce transform independently;
/// positions are left alone, so overlapping bodies may interpenetrate for a
/// few ticks before separating.
pub fn collide_bodies(a: &mut Body, b: &mut Body, factor: f32, damping: f32) -> bool {
    if !bodies_touch(a, b) {
        return false;
    }
    a.bounce(factor, damping);
    b.bounce(factor, damping);
    true
}
