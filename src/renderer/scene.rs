//! Scene assembly
//!
//! Turns a [`World`] snapshot into one triangle list in playfield units.
//! Draw order: particles, paddle, then the mode's entities on top.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::settings::Settings;
use crate::sim::{Arena, Category, Paddle, ParticleColor, Target, World};

const PARTICLE_RADIUS: f32 = 4.0;
const CIRCLE_SEGMENTS: u32 = 24;
/// Each logo half is this much wider than half the paddle
const LOGO_OVERLAP: f32 = 20.0;
const BUCKET_LIP: f32 = 10.0;
const BUCKET_STROKE: f32 = 3.0;

/// Build every vertex for the current frame
pub fn build_scene(world: &World, settings: &Settings) -> Vec<Vertex> {
    let mut verts = Vec::new();

    if settings.particles {
        for p in world.particles.iter() {
            let base = match p.color {
                ParticleColor::RedDot => colors::RED_DOT,
                ParticleColor::Gold => colors::GOLD,
            };
            verts.extend(shapes::circle(p.pos, PARTICLE_RADIUS, with_alpha(base, p.life), 8));
        }
    }

    paddle(&mut verts, &world.paddle);

    match &world.arena {
        Arena::Bounce(state) => {
            let ball = &state.ball;
            verts.extend(shapes::circle(ball.pos, ball.radius, colors::RED_DOT, CIRCLE_SEGMENTS));
            verts.extend(shapes::circle(
                ball.pos - Vec2::splat(4.0),
                ball.radius / 3.0,
                colors::HIGHLIGHT,
                12,
            ));
        }
        Arena::Shooter(state) => {
            for b in state.bullets.iter().filter(|b| b.active) {
                verts.extend(shapes::circle(b.pos, b.radius, colors::RED_DOT, 12));
            }
            for t in state.targets.iter().filter(|t| t.active) {
                money(&mut verts, t);
            }
        }
        Arena::Catch(state) => {
            bucket(&mut verts, &world.paddle);
            for item in state.items.iter().filter(|i| i.active) {
                money(&mut verts, item);
            }
        }
    }

    verts
}

/// Particle opacity follows remaining life and never goes below zero
fn with_alpha(mut color: [f32; 4], life: f32) -> [f32; 4] {
    color[3] *= life.clamp(0.0, 1.0);
    color
}

/// Two overlapping logo halves: green hill on the left, blue peak on the right
fn paddle(verts: &mut Vec<Vertex>, p: &Paddle) {
    let half = p.width / 2.0 + LOGO_OVERLAP;
    let bottom = p.bottom();

    verts.extend(shapes::triangle(
        Vec2::new(p.pos.x, bottom),
        Vec2::new(p.pos.x + half * 0.5, p.pos.y + p.height * 0.3),
        Vec2::new(p.pos.x + half, bottom),
        colors::GREEN,
    ));

    let blue_x = p.right() - half;
    verts.extend(shapes::triangle(
        Vec2::new(blue_x, bottom),
        Vec2::new(blue_x + half * 0.5, p.pos.y + p.height * 0.25),
        Vec2::new(blue_x + half, bottom),
        colors::BLUE,
    ));
}

/// Upright lips at both paddle ends
fn bucket(verts: &mut Vec<Vertex>, p: &Paddle) {
    let size = Vec2::new(BUCKET_STROKE, BUCKET_LIP);
    for x in [p.pos.x, p.right() - BUCKET_STROKE] {
        verts.extend(shapes::rect(Vec2::new(x, p.pos.y - BUCKET_LIP), size, colors::TEXT));
    }
}

/// Banknotes are striped rectangles; the catch tiers get their own shapes
fn money(verts: &mut Vec<Vertex>, t: &Target) {
    let center = t.center();
    let size = Vec2::new(t.width, t.height);
    match t.category {
        Category::Usd | Category::Rmb | Category::Cash => {
            let color = if t.category == Category::Rmb {
                colors::YUAN
            } else {
                colors::DOLLAR
            };
            let note = Vec2::new(size.x, size.y * 0.55);
            let min = center - note / 2.0;
            verts.extend(shapes::rect(min, note, color));
            let band = Vec2::new(note.x * 0.3, note.y);
            verts.extend(shapes::rect(center - band / 2.0, band, colors::NOTE_BAND));
        }
        Category::Coin => {
            verts.extend(shapes::circle(center, size.x * 0.35, colors::GOLD, 16));
        }
        Category::Bag => {
            verts.extend(shapes::circle(center + Vec2::new(0.0, size.y * 0.1), size.x * 0.4, colors::BAG, 16));
            verts.extend(shapes::triangle(
                center - Vec2::new(size.x * 0.2, size.y * 0.2),
                center - Vec2::new(0.0, size.y * 0.5),
                center + Vec2::new(size.x * 0.2, -size.y * 0.2),
                colors::BAG,
            ));
        }
        Category::Gem => {
            verts.extend(shapes::diamond(center, size * 0.45, colors::GEM));
        }
    }
}
