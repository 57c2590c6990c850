pub mod arena;
pub mod characters;
pub mod components;
pub mod config;
pub mod dispatch;
pub mod game;
pub mod render;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use characters::{
    BaseStats, Character, CharacterId, CharacterRegistry, CharacterSpec, Sword, Unarmed,
    WeaponSpec,
};
pub use components::*;
pub use config::*;
pub use game::*;
pub use render::{draw_frame, Color, Surface};
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the arena simulation: integrate both balls (including
/// wall bounces), resolve the ball-ball collision, run the per-frame
/// character updates, attempt weapon fire, then advance and resolve
/// projectiles. Drawing is a separate pass ([`draw_frame`]).
pub fn step(
    world: &mut World,
    time: &mut Time,
    arena: &Arena,
    config: &Config,
    registry: &CharacterRegistry,
    events: &mut Events,
) {
    // Clear events at start of frame
    events.clear();

    integrate_balls(world, arena, config, registry, events);
    resolve_ball_clash(world, registry, events);
    update_characters(world, registry, events);
    fire_weapons(world, time, registry, events);
    spawn_projectiles(world, events);
    step_projectiles(world, arena, config, registry, events);

    // Advance the clock (clamped to prevent large jumps); it only gates
    // weapon cooldowns, never motion
    time.now += time.dt.min(Params::MAX_DT);
}

/// Helper to create a ball entity. Stats are zeroed until the character's
/// init callback runs.
pub fn create_ball(world: &mut World, player: u8, character: CharacterId) -> hecs::Entity {
    world.spawn((Ball::new(player, character),))
}
