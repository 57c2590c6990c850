use glam::Vec2;

use crate::characters::{CharacterId, CharacterSpec};
use crate::render::Color;

/// Which boundary a ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
    Floor,
    Ceiling,
}

/// Visual style of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Arrow,
    Bullet,
    Sword,
}

/// Ball component - one player-controlled combatant. Exactly two exist for
/// the lifetime of a match; stats are mutated in place by character
/// callbacks.
#[derive(Debug, Clone)]
pub struct Ball {
    pub player: u8, // 1 or 2
    pub pos: Vec2,
    pub vel: Vec2, // units per tick
    pub radius: f32,
    pub hp: f32,
    pub max_hp: f32,
    pub speed: f32,
    pub max_speed: f32,
    pub damage: f32,
    /// Current weapon damage. Kept per ball so character logic can escalate
    /// it without touching the shared `WeaponSpec`.
    pub weapon_damage: f32,
    pub hit_count: u32,
    /// Velocity magnitude, recomputed each physics step
    pub current_speed: f32,
    /// Simulation time of the last shot; `None` = may fire immediately
    pub last_shot: Option<f32>,
    pub character: CharacterId,
}

impl Ball {
    pub fn new(player: u8, character: CharacterId) -> Self {
        Self {
            player,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: 30.0,
            hp: 100.0,
            max_hp: 100.0,
            speed: 0.0,
            max_speed: 0.0,
            damage: 0.0,
            weapon_damage: 0.0,
            hit_count: 0,
            current_speed: 0.0,
            last_shot: None,
            character,
        }
    }

    /// Copy a character's base stats onto the ball and reset bookkeeping.
    /// Called from every character's `on_init`.
    pub fn apply_base_stats(&mut self, spec: &CharacterSpec) {
        self.speed = spec.stats.speed;
        self.max_speed = spec.stats.max_speed;
        self.damage = spec.stats.damage;
        self.radius = spec.stats.radius;
        self.max_hp = spec.stats.max_hp;
        self.hp = spec.stats.max_hp;
        self.weapon_damage = spec.weapon.as_ref().map_or(0.0, |w| w.damage);
        self.hit_count = 0;
    }

    /// Reduce hp, clamped at zero
    pub fn apply_damage(&mut self, amount: f32) {
        self.hp = (self.hp - amount).max(0.0);
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0.0
    }

    /// Whether the weapon cooldown (`fire_rate` in milliseconds) has elapsed
    pub fn can_fire(&self, now: f32, fire_rate_ms: f32) -> bool {
        match self.last_shot {
            None => true,
            Some(t) => (now - t) * 1000.0 >= fire_rate_ms,
        }
    }
}

/// Projectile component. Spawned by the weapon-fire step, despawned on
/// out-of-bounds exit or on hit. Ignores gravity.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2, // units per tick
    pub damage: f32,
    pub size: f32,
    pub owner: u8, // player number of the firing ball, excluded from hit detection
    pub sprite: SpriteKind,
    pub color: Color,
}
