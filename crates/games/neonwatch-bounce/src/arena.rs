use serde::{Deserialize, Serialize};

/// A 2D point or vector in canvas coordinates (Y grows downward).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// The containing circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Arena {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Point on the circle at `angle` radians.
    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.point_at_radius(angle, self.radius)
    }

    /// Point at `radius` from the center along `angle` radians.
    pub fn point_at_radius(&self, angle: f32, radius: f32) -> Vec2 {
        Vec2::new(
            self.center.x + angle.cos() * radius,
            self.center.y + angle.sin() * radius,
        )
    }

    /// Angle of `p` as seen from the center.
    pub fn angle_of(&self, p: Vec2) -> f32 {
        (p.y - self.center.y).atan2(p.x - self.center.x)
    }
}
