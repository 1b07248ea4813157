//! Triangle-list geometry for game objects
//!
//! All geometry is boxes. Faces get a fixed per-face brightness so shapes
//! read as 3D without any lighting pass in the shader.

use glam::Vec3;

use crate::consts::GROUND_Y;
use crate::sim::state::{Collectible, Decoration, GameState, Hazard, HazardKind, Player};

use super::vertex::{Vertex, colors};

/// Per-face brightness: top, bottom, front/back (z), left/right (x)
const SHADE_TOP: f32 = 1.0;
const SHADE_BOTTOM: f32 = 0.55;
const SHADE_Z: f32 = 0.85;
const SHADE_X: f32 = 0.75;

fn shade(color: [f32; 4], k: f32) -> [f32; 4] {
    [color[0] * k, color[1] * k, color[2] * k, color[3]]
}

fn push_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        out.push(Vertex::new(p.x, p.y, p.z, color));
    }
}

/// Emit an axis-aligned box (36 vertices) centered at `center`
pub fn push_box(out: &mut Vec<Vertex>, center: Vec3, size: Vec3, color: [f32; 4]) {
    let h = size * 0.5;
    let (x0, x1) = (center.x - h.x, center.x + h.x);
    let (y0, y1) = (center.y - h.y, center.y + h.y);
    let (z0, z1) = (center.z - h.z, center.z + h.z);

    let p = Vec3::new;
    let faces = [
        // Top / bottom
        ([p(x0, y1, z0), p(x0, y1, z1), p(x1, y1, z1), p(x1, y1, z0)], SHADE_TOP),
        ([p(x0, y0, z0), p(x1, y0, z0), p(x1, y0, z1), p(x0, y0, z1)], SHADE_BOTTOM),
        // Front / back (z faces)
        ([p(x0, y0, z1), p(x1, y0, z1), p(x1, y1, z1), p(x0, y1, z1)], SHADE_Z),
        ([p(x0, y0, z0), p(x0, y1, z0), p(x1, y1, z0), p(x1, y0, z0)], SHADE_Z),
        // Left / right (x faces)
        ([p(x0, y0, z0), p(x0, y0, z1), p(x0, y1, z1), p(x0, y1, z0)], SHADE_X),
        ([p(x1, y0, z0), p(x1, y1, z0), p(x1, y1, z1), p(x1, y0, z1)], SHADE_X),
    ];
    for (corners, k) in faces {
        push_quad(out, corners, shade(color, k));
    }
}

/// The ground plane, drawn as a long flat slab just below y=0
pub fn push_ground(out: &mut Vec<Vertex>) {
    push_box(
        out,
        Vec3::new(0.0, GROUND_Y - 0.01, 0.0),
        Vec3::new(200.0, 0.02, 20.0),
        colors::GROUND,
    );
}

/// Player body: torso, head, tail and legs, all scaled to the effective
/// height so crouching visibly squashes the figure.
pub fn push_player(out: &mut Vec<Vertex>, player: &Player) {
    let base = player.pos;
    let h = player.effective_height();
    let c = colors::PLAYER;

    let part = |out: &mut Vec<Vertex>, off: Vec3, size: Vec3| {
        push_box(out, base + off, size, c);
    };

    part(out, Vec3::new(0.0, 0.55 * h, 0.0), Vec3::new(1.0, 0.5 * h, 0.7));
    part(out, Vec3::new(0.55, 0.9 * h, 0.0), Vec3::new(0.5, 0.35 * h, 0.5));
    part(out, Vec3::new(-0.65, 0.65 * h, 0.0), Vec3::new(0.45, 0.2 * h, 0.3));
    part(out, Vec3::new(0.1, 0.15 * h, 0.18), Vec3::new(0.25, 0.3 * h, 0.2));
    part(out, Vec3::new(0.1, 0.15 * h, -0.18), Vec3::new(0.25, 0.3 * h, 0.2));
}

/// Ground hazards look like cacti: a trunk and two arms
fn push_ground_hazard(out: &mut Vec<Vertex>, hazard: &Hazard) {
    let base = hazard.pos;
    let size = hazard.size;
    let c = colors::GROUND_HAZARD;

    push_box(
        out,
        base + Vec3::new(0.0, size.y * 0.5, 0.0),
        Vec3::new(size.x * 0.45, size.y, size.z * 0.6),
        c,
    );
    push_box(
        out,
        base + Vec3::new(-size.x * 0.35, size.y * 0.6, 0.0),
        Vec3::new(size.x * 0.3, size.y * 0.35, size.z * 0.4),
        c,
    );
    push_box(
        out,
        base + Vec3::new(size.x * 0.35, size.y * 0.45, 0.0),
        Vec3::new(size.x * 0.3, size.y * 0.35, size.z * 0.4),
        c,
    );
}

/// Flying hazards: a body, a wide wing slab and a beak on the leading edge
fn push_flying_hazard(out: &mut Vec<Vertex>, hazard: &Hazard) {
    let center = hazard.pos + Vec3::new(0.0, hazard.size.y * 0.5, 0.0);
    let size = hazard.size;
    let c = colors::FLYING_HAZARD;

    push_box(out, center, Vec3::new(size.x, size.y * 0.55, size.z * 0.5), c);
    push_box(
        out,
        center + Vec3::new(0.0, size.y * 0.1, 0.0),
        Vec3::new(size.x * 0.45, size.y * 0.2, size.z * 1.6),
        c,
    );
    // Beak points toward the player (scroll direction is -x)
    push_box(
        out,
        center + Vec3::new(-size.x * 0.6, 0.0, 0.0),
        Vec3::new(size.x * 0.35, size.y * 0.25, size.z * 0.25),
        c,
    );
}

fn push_collectible(out: &mut Vec<Vertex>, c: &Collectible) {
    push_box(out, c.pos, Vec3::splat(c.size), colors::COLLECTIBLE);
}

/// Clouds: three overlapping flattened lumps
fn push_cloud(out: &mut Vec<Vertex>, deco: &Decoration) {
    let s = deco.scale;
    let lumps = [
        (Vec3::ZERO, Vec3::new(1.6, 0.6, 0.9)),
        (Vec3::new(-0.7, 0.15, 0.1), Vec3::new(1.0, 0.5, 0.7)),
        (Vec3::new(0.7, 0.1, -0.1), Vec3::new(1.0, 0.45, 0.7)),
    ];
    for (off, size) in lumps {
        push_box(out, deco.pos + off * s, size * s, colors::CLOUD);
    }
}

/// Build the full frame's triangle list from the current state.
///
/// Draw order is back-to-front-ish but correctness comes from the depth
/// buffer, not ordering. While invulnerable the player blinks.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(
        36 * (1 + state.hazards.len() * 3 + state.collectibles.len() + state.decorations.len() * 3 + 5),
    );

    push_ground(&mut out);
    for deco in &state.decorations {
        push_cloud(&mut out, deco);
    }
    for hazard in &state.hazards {
        match hazard.kind {
            HazardKind::Ground => push_ground_hazard(&mut out, hazard),
            HazardKind::Flying => push_flying_hazard(&mut out, hazard),
        }
    }
    for collectible in &state.collectibles {
        push_collectible(&mut out, collectible);
    }

    let blink_off = state.invuln_timer > 0.0 && (state.invuln_timer * 10.0) as i32 % 2 == 1;
    if !blink_off {
        push_player(&mut out, &state.player);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;

    #[test]
    fn test_box_is_36_vertices() {
        let mut out = Vec::new();
        push_box(&mut out, Vec3::ZERO, Vec3::ONE, colors::PLAYER);
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn test_box_spans_its_extents() {
        let mut out = Vec::new();
        push_box(&mut out, Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0), colors::PLAYER);
        let xs: Vec<f32> = out.iter().map(|v| v.position[0]).collect();
        assert_eq!(xs.iter().copied().fold(f32::INFINITY, f32::min), 0.0);
        assert_eq!(xs.iter().copied().fold(f32::NEG_INFINITY, f32::max), 2.0);
    }

    #[test]
    fn test_scene_is_triangle_list() {
        let mut state = GameState::new(5, Tuning::default());
        state.timers.hazard = 0.0;
        state.timers.collectible = 0.0;
        state.timers.decoration = 0.0;
        crate::sim::spawn::advance(&mut state, 1.0 / 60.0);

        let verts = scene_vertices(&state);
        assert!(verts.len() % 3 == 0);
        // Ground plus player at minimum, plus the three spawned entities
        assert!(verts.len() > 36 * 7);
    }

    #[test]
    fn test_crouch_squashes_player_geometry() {
        let mut player = Player::new();
        let mut upright = Vec::new();
        push_player(&mut upright, &player);
        player.crouching = true;
        let mut crouched = Vec::new();
        push_player(&mut crouched, &player);

        let top = |vs: &[Vertex]| {
            vs.iter().map(|v| v.position[1]).fold(f32::NEG_INFINITY, f32::max)
        };
        assert!(top(&crouched) < top(&upright));
    }
}
