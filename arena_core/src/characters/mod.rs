//! Character plugins: each character is a named type implementing
//! [`Character`]. Required callbacks are trait methods without defaults, so a
//! definition missing one fails at compile time rather than at call time.

use std::collections::HashMap;
use std::fmt;

use crate::components::{Ball, SpriteKind, WallSide};
use crate::render::{Color, Surface};

pub mod sword;
pub mod unarmed;

pub use sword::Sword;
pub use unarmed::Unarmed;

/// Lowercase-normalized character identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Ranged-attack descriptor; `None` on a character means melee only
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    pub damage: f32,
    /// Minimum interval between shots, milliseconds
    pub fire_rate: f32,
    pub projectile_speed: f32,
    pub projectile_size: f32,
    pub sprite: SpriteKind,
}

/// Stats copied onto a ball when a character is (re)initialized
#[derive(Debug, Clone, Copy)]
pub struct BaseStats {
    pub speed: f32,
    pub max_speed: f32,
    pub damage: f32,
    pub max_hp: f32,
    pub radius: f32,
}

/// Immutable character template: identity, display metadata, weapon, stats
#[derive(Debug, Clone)]
pub struct CharacterSpec {
    pub id: CharacterId,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub color: Color,
    pub border_color: Color,
    pub weapon: Option<WeaponSpec>,
    pub stats: BaseStats,
}

/// Behavior hooks invoked by the combat dispatcher.
///
/// `on_wall_hit` may mutate only the bouncing ball's own stats. `on_ball_hit`
/// receives the opponent mutably and may apply contact damage to it.
/// `on_projectile_hit` fires on the *shooter* when one of its projectiles
/// lands, and is optional, as is `draw_weapon`.
pub trait Character: Send + Sync {
    fn spec(&self) -> &CharacterSpec;

    fn on_init(&self, ball: &mut Ball);

    fn on_update(&self, ball: &mut Ball);

    fn on_wall_hit(&self, ball: &mut Ball, side: WallSide);

    fn on_ball_hit(&self, ball: &mut Ball, opponent: &mut Ball);

    fn on_projectile_hit(&self, _ball: &mut Ball) {}

    fn draw_weapon(&self, _surface: &mut dyn Surface, _ball: &Ball) {}
}

/// Append-only character registry. Lookup is case-insensitive; `ids` yields
/// registration order, which selection UIs rely on. Re-registering an id
/// replaces the definition but keeps its original position.
#[derive(Default)]
pub struct CharacterRegistry {
    order: Vec<CharacterId>,
    characters: HashMap<CharacterId, Box<dyn Character>>,
}

impl CharacterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the built-in roster (Unarmed first, so it
    /// is the default selection)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(Unarmed::new()));
        registry.register(Box::new(Sword::new()));
        registry
    }

    pub fn register(&mut self, character: Box<dyn Character>) {
        let id = character.spec().id.clone();
        if !self.characters.contains_key(&id) {
            self.order.push(id.clone());
        }
        self.characters.insert(id, character);
    }

    pub fn get(&self, id: &str) -> Option<&dyn Character> {
        self.get_by_id(&CharacterId::new(id))
    }

    pub fn get_by_id(&self, id: &CharacterId) -> Option<&dyn Character> {
        self.characters.get(id).map(Box::as_ref)
    }

    /// Registered ids in registration order
    pub fn ids(&self) -> &[CharacterId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
