use glam::Vec2;
use hecs::World;
use log::warn;

use crate::characters::CharacterRegistry;
use crate::components::{Ball, Projectile, SpriteKind};

/// RGBA color, alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const DARK_TEXT: Color = Color::rgb(0x33, 0x33, 0x33);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing primitives the embedder provides. The core never manages the
/// surface lifecycle; it only issues draw calls once per frame.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);
    /// Rectangle centered at `center`, rotated by `rotation` radians
    fn fill_rect(&mut self, center: Vec2, size: Vec2, rotation: f32, color: Color);
    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    /// Text centered at `center`
    fn fill_text(&mut self, text: &str, center: Vec2, px: f32, color: Color);
}

/// Presentation pass: clear, then projectiles, then balls. Reads state only;
/// all simulation happened in `step`.
pub fn draw_frame(world: &World, registry: &CharacterRegistry, surface: &mut dyn Surface) {
    surface.clear(Color::WHITE);

    for (_entity, proj) in world.query::<&Projectile>().iter() {
        draw_projectile(surface, proj);
    }

    let mut query = world.query::<&Ball>();
    let mut balls: Vec<&Ball> = query.iter().map(|(_e, b)| b).collect();
    balls.sort_by_key(|b| b.player);
    for ball in balls {
        draw_ball(surface, registry, ball);
    }
}

fn draw_ball(surface: &mut dyn Surface, registry: &CharacterRegistry, ball: &Ball) {
    let Some(character) = registry.get_by_id(&ball.character) else {
        warn!(
            "cannot draw player {}: character `{}` not registered",
            ball.player, ball.character
        );
        return;
    };
    let spec = character.spec();

    surface.fill_circle(ball.pos, ball.radius, spec.color);
    surface.stroke_circle(ball.pos, ball.radius, 3.0, spec.border_color);

    character.draw_weapon(surface, ball);

    let text_color = if ball.player == 1 {
        Color::WHITE
    } else {
        Color::DARK_TEXT
    };
    surface.fill_text(&format!("{}", ball.hp.ceil()), ball.pos, 16.0, text_color);
}

fn draw_projectile(surface: &mut dyn Surface, proj: &Projectile) {
    let angle = proj.vel.y.atan2(proj.vel.x);
    let dir = Vec2::from_angle(angle);
    let perp = dir.perp();

    match proj.sprite {
        SpriteKind::Arrow => {
            surface.fill_rect(proj.pos, Vec2::new(20.0, 4.0), angle, proj.color);
            surface.fill_triangle(
                proj.pos + dir * 10.0,
                proj.pos + dir * 6.0 - perp * 4.0,
                proj.pos + dir * 6.0 + perp * 4.0,
                proj.color,
            );
        }
        SpriteKind::Bullet => {
            surface.fill_rect(proj.pos, Vec2::splat(proj.size), 0.0, proj.color);
        }
        SpriteKind::Sword => {
            // Short blade with a pointed tip, oriented along the velocity
            let half_width = proj.size * 0.25;
            surface.fill_rect(
                proj.pos,
                Vec2::new(proj.size * 2.5, half_width * 2.0),
                angle,
                proj.color,
            );
            surface.fill_triangle(
                proj.pos + dir * (proj.size * 1.85),
                proj.pos + dir * (proj.size * 1.25) - perp * half_width * 1.5,
                proj.pos + dir * (proj.size * 1.25) + perp * half_width * 1.5,
                proj.color,
            );
        }
    }
}

#[cfg(test)]
pub(crate) mod test_surface {
    use super::*;

    /// Records draw calls so tests can assert on the presentation pass
    #[derive(Default)]
    pub struct RecordingSurface {
        pub clears: usize,
        pub circles: Vec<(Vec2, f32, Color)>,
        pub strokes: usize,
        pub rects: usize,
        pub triangles: usize,
        pub texts: Vec<String>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self, _color: Color) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }

        fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _line_width: f32, _color: Color) {
            self.strokes += 1;
        }

        fn fill_rect(&mut self, _center: Vec2, _size: Vec2, _rotation: f32, _color: Color) {
            self.rects += 1;
        }

        fn fill_triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, _color: Color) {
            self.triangles += 1;
        }

        fn fill_text(&mut self, text: &str, _center: Vec2, _px: f32, _color: Color) {
            self.texts.push(text.to_string());
        }
    }
}
