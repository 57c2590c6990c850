use glam::Vec2;

use crate::characters::{BaseStats, Character, CharacterId, CharacterSpec, WeaponSpec};
use crate::components::{Ball, SpriteKind, WallSide};
use crate::render::{Color, Surface};

/// Armed character. Fires sword projectiles at the opponent; every successful
/// hit of either kind raises the weapon damage by one.
pub struct Sword {
    spec: CharacterSpec,
}

const BASE_DAMAGE: f32 = 5.0;

impl Sword {
    pub fn new() -> Self {
        Self {
            spec: CharacterSpec {
                id: CharacterId::new("sword"),
                name: "Sword".to_string(),
                icon: "🗡️".to_string(),
                description: "Sword deals 1 more damage each attack. Reliable damage scaling."
                    .to_string(),
                color: Color::rgb(0xFA, 0x80, 0x72),        // salmon
                border_color: Color::rgb(0xE9, 0x96, 0x7A), // dark salmon
                weapon: Some(WeaponSpec {
                    damage: BASE_DAMAGE,
                    fire_rate: 800.0,
                    projectile_speed: 12.0,
                    projectile_size: 8.0,
                    sprite: SpriteKind::Sword,
                }),
                stats: BaseStats {
                    speed: 5.0,
                    max_speed: 5.0,
                    damage: BASE_DAMAGE,
                    max_hp: 100.0,
                    radius: 30.0,
                },
            },
        }
    }

    fn escalate(ball: &mut Ball) {
        ball.weapon_damage += 1.0;
        ball.hit_count += 1;
    }
}

impl Default for Sword {
    fn default() -> Self {
        Self::new()
    }
}

impl Character for Sword {
    fn spec(&self) -> &CharacterSpec {
        &self.spec
    }

    fn on_init(&self, ball: &mut Ball) {
        ball.apply_base_stats(&self.spec);
    }

    fn on_update(&self, ball: &mut Ball) {
        // Keep the displayed damage stat in sync with the escalating blade
        ball.damage = ball.weapon_damage;
    }

    fn on_wall_hit(&self, _ball: &mut Ball, _side: WallSide) {
        // No effect on wall bounce
    }

    fn on_ball_hit(&self, ball: &mut Ball, opponent: &mut Ball) {
        // Contact damage is half the projectile damage
        let contact_damage = ball.weapon_damage * 0.5;
        opponent.apply_damage(contact_damage);
        Self::escalate(ball);
    }

    fn on_projectile_hit(&self, ball: &mut Ball) {
        Self::escalate(ball);
    }

    fn draw_weapon(&self, surface: &mut dyn Surface, ball: &Ball) {
        let angle = ball.vel.y.atan2(ball.vel.x);
        let dir = Vec2::from_angle(angle);
        let perp = dir.perp();
        let r = ball.radius;
        let at = |along: f32, across: f32| ball.pos + dir * along + perp * across;

        // Blade tints red as the damage escalates above base
        let level = (ball.weapon_damage - BASE_DAMAGE).max(0.0);
        let red = (192.0 + level * 8.0).min(255.0) as u8;
        let other = (192.0 - level * 12.0).max(0.0) as u8;
        let blade = Color::rgb(red, other, other);

        // Handle, guard, blade, tip, shine
        surface.fill_rect(at(r, 0.0), Vec2::new(10.0, 8.0), angle, Color::rgb(0x8B, 0x45, 0x13));
        surface.fill_rect(at(r + 5.0, 0.0), Vec2::new(4.0, 14.0), angle, Color::rgb(0xFF, 0xD7, 0x00));
        surface.fill_rect(at(r + 19.5, 0.0), Vec2::new(25.0, 6.0), angle, blade);
        surface.fill_triangle(at(r + 32.0, 0.0), at(r + 27.0, -4.0), at(r + 27.0, 4.0), blade);
        surface.fill_rect(
            at(r + 18.0, -1.0),
            Vec2::new(18.0, 2.0),
            angle,
            Color::rgba(255, 255, 255, 0.5),
        );
    }
}
