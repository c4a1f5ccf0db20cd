use serde::{Deserialize, Serialize};

/// Data-driven configuration for the bouncing-logos arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BounceConfig {
    /// Arena center X.
    pub center_x: f32,
    /// Arena center Y.
    pub center_y: f32,
    /// Radius of the containing circle.
    pub circle_radius: f32,
    /// Radius shared by both bodies.
    pub body_radius: f32,
    /// Distance inward from the circle edge at which bodies spawn.
    pub spawn_inset: f32,
    /// Spawn velocity of the first body. The second body mirrors it.
    pub spawn_velocity_x: f32,
    pub spawn_velocity_y: f32,
    /// Scoring zone footprint.
    pub zone_width: f32,
    pub zone_height: f32,
    /// Zone angle at spawn (radians).
    pub zone_start_angle: f32,
    /// Zone rotation per tick (radians).
    pub zone_angular_velocity: f32,
    /// Velocity multiplier applied on contact (negative reverses direction).
    pub bounce_factor: f32,
    /// Damping applied right after the bounce factor.
    pub bounce_damping: f32,
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            center_x: 400.0,
            center_y: 300.0,
            circle_radius: 200.0,
            body_radius: 20.0,
            spawn_inset: 50.0,
            spawn_velocity_x: 2.0,
            spawn_velocity_y: 1.0,
            zone_width: 80.0,
            zone_height: 40.0,
            zone_start_angle: 0.0,
            zone_angular_velocity: 0.02,
            bounce_factor: -1.5,
            bounce_damping: 0.9,
        }
    }
}

impl BounceConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("NEONWATCH_BOUNCE_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
        {
            match toml::from_str::<Self>(&contents) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "Invalid bounce config, ignoring");
                },
            }
        }
        if let Ok(contents) = std::fs::read_to_string("config/bounce.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}
