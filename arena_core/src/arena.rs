use glam::Vec2;

use crate::config::Config;

/// Rectangular playfield. The origin is the top-left corner; y grows
/// downward, so the floor is at `y == height`.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.arena_width, config.arena_height)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamp a ball center so its circle stays inside the horizontal bounds
    pub fn clamp_x(&self, x: f32, radius: f32) -> f32 {
        x.clamp(radius, self.width - radius)
    }

    /// Clamp a ball center so its circle stays inside the vertical bounds
    pub fn clamp_y(&self, y: f32, radius: f32) -> f32 {
        y.clamp(radius, self.height - radius)
    }

    /// Whether a point is still within the arena plus `margin` on every side
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.x <= self.width + margin
            && point.y >= -margin
            && point.y <= self.height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_keeps_ball_inside() {
        let arena = Arena::new(800.0, 500.0);
        assert_eq!(arena.clamp_x(-10.0, 30.0), 30.0);
        assert_eq!(arena.clamp_x(900.0, 30.0), 770.0);
        assert_eq!(arena.clamp_y(499.0, 30.0), 470.0);
        assert_eq!(arena.clamp_y(250.0, 30.0), 250.0);
    }

    #[test]
    fn test_contains_with_margin() {
        let arena = Arena::new(800.0, 500.0);
        assert!(arena.contains_with_margin(Vec2::new(-49.0, 250.0), 50.0));
        assert!(!arena.contains_with_margin(Vec2::new(-51.0, 250.0), 50.0));
        assert!(arena.contains_with_margin(Vec2::new(849.0, 549.0), 50.0));
        assert!(!arena.contains_with_margin(Vec2::new(400.0, 551.0), 50.0));
    }
}
