pub mod arena;
pub mod config;
pub mod physics;
pub mod zone;

use serde::{Deserialize, Serialize};

use arena::{Arena, Vec2};
use config::BounceConfig;
use physics::{Body, collide_bodies};
use zone::ScoringZone;

/// Emitted when a body enters the scoring zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// Index of the body that entered the zone (the lower one if both did).
    pub body: usize,
    /// Score after this goal.
    pub score: u32,
}

/// Complete state of one running arena. Owned by a single session; nothing
/// here is shared or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub arena: Arena,
    pub bodies: [Body; 2],
    /// Positions and velocities restored after every goal.
    pub spawn: [Body; 2],
    pub zone: ScoringZone,
    pub score: u32,
    pub ticks: u64,
    bounce_factor: f32,
    bounce_damping: f32,
}

impl SimulationState {
    /// Build the opening layout: two bodies on the horizontal diameter moving
    /// in opposite directions, zone at its start angle.
    pub fn new(config: &BounceConfig) -> Self {
        let arena = Arena::new(Vec2::new(config.center_x, config.center_y), config.circle_radius);
        let offset = config.circle_radius - config.spawn_inset;
        let velocity = Vec2::new(config.spawn_velocity_x, config.spawn_velocity_y);
        let spawn = [
            Body::new(
                Vec2::new(arena.center.x + offset, arena.center.y),
                velocity,
                config.body_radius,
            ),
            Body::new(
                Vec2::new(arena.center.x - offset, arena.center.y),
                velocity.scale(-1.0),
                config.body_radius,
            ),
        ];
        let zone = ScoringZone::new(
            &arena,
            config.zone_start_angle,
            config.zone_angular_velocity,
            config.zone_width,
            config.zone_height,
        );
        Self {
            arena,
            bodies: spawn,
            spawn,
            zone,
            score: 0,
            ticks: 0,
            bounce_factor: config.bounce_factor,
            bounce_damping: config.bounce_damping,
        }
    }

    /// Build the opening layout from [`BounceConfig::load`].
    pub fn load() -> Self {
        Self::new(&BounceConfig::load())
    }

    /// Advance one tick.
    ///
    /// Order: integrate, boundary reflection, body-body contact, zone
    /// rotation, goal check. A goal resets both bodies before returning, so a
    /// body can never score twice from the same entry.
    pub fn step(&mut self) -> Option<GoalEvent> {
        self.ticks += 1;

        for body in &mut self.bodies {
            body.integrate();
        }

        for body in &mut self.bodies {
            body.reflect_off_boundary(&self.arena, self.bounce_factor, self.bounce_damping);
        }

        let [a, b] = &mut self.bodies;
        collide_bodies(a, b, self.bounce_factor, self.bounce_damping);

        self.zone.advance(&self.arena);

        let scorer = self
            .bodies
            .iter()
            .position(|body| self.zone.contains(body.position))?;

        self.score += 1;
        self.reset_bodies();
        tracing::debug!(body = scorer, score = self.score, tick = self.ticks, "Goal");
        Some(GoalEvent {
            body: scorer,
            score: self.score,
        })
    }

    /// Put both bodies back at their spawn positions and velocities. The zone
    /// keeps rotating from where it is.
    pub fn reset_bodies(&mut self) {
        self.bodies = self.spawn;
    }
}

/// Advance `state` by `ticks` steps, returning the goals scored along the way.
///
/// Hosts call this from whatever drives them (a frame callback, a timer, or a
/// test loop).
pub fn advance(state: &mut SimulationState, ticks: u32) -> Vec<GoalEvent> {
    (0..ticks).filter_map(|_| state.step()).collect()
}
