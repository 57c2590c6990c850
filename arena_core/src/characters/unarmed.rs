use crate::characters::{BaseStats, Character, CharacterId, CharacterSpec};
use crate::components::{Ball, WallSide};
use crate::render::Color;

/// Melee-only character. Deals contact damage proportional to its current
/// velocity and gains speed with every hit.
pub struct Unarmed {
    spec: CharacterSpec,
}

impl Unarmed {
    pub fn new() -> Self {
        Self {
            spec: CharacterSpec {
                id: CharacterId::new("unarmed"),
                name: "Unarmed".to_string(),
                icon: "⚪".to_string(),
                description:
                    "Gains speed and damage with every hit. Damage scales with current velocity."
                        .to_string(),
                color: Color::rgb(0x99, 0x99, 0x99),
                border_color: Color::rgb(0x66, 0x66, 0x66),
                weapon: None,
                stats: BaseStats {
                    speed: 5.0,
                    max_speed: 5.0,
                    damage: 0.0,
                    max_hp: 100.0,
                    radius: 30.0,
                },
            },
        }
    }

    /// Wall and ball hits both grow the speed cap, then the speed itself
    fn grow_speed(ball: &mut Ball) {
        ball.hit_count += 1;
        ball.max_speed += 0.5;
        ball.speed = (ball.speed + 0.5).min(ball.max_speed);
    }
}

impl Default for Unarmed {
    fn default() -> Self {
        Self::new()
    }
}

impl Character for Unarmed {
    fn spec(&self) -> &CharacterSpec {
        &self.spec
    }

    fn on_init(&self, ball: &mut Ball) {
        ball.apply_base_stats(&self.spec);
    }

    fn on_update(&self, ball: &mut Ball) {
        // Damage tracks velocity: 2 damage per unit of speed
        ball.damage = ball.current_speed * 2.0;
    }

    fn on_wall_hit(&self, ball: &mut Ball, _side: WallSide) {
        Self::grow_speed(ball);

        // Apply the new speed to the velocity immediately
        let magnitude = ball.vel.length();
        if magnitude > 0.0 {
            ball.vel *= ball.speed / magnitude;
            ball.current_speed = ball.vel.length();
        }
    }

    fn on_ball_hit(&self, ball: &mut Ball, opponent: &mut Ball) {
        let contact_damage = ball.current_speed * 2.0;
        opponent.apply_damage(contact_damage);

        Self::grow_speed(ball);
        ball.damage += 0.5;
    }
}
