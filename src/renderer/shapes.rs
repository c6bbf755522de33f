//! Shape generation for 2D primitives
//!
//! Everything becomes a triangle list in playfield coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::scene::{HealthBar, Scene};
use super::vertex::Vertex;

/// Segments used for a circle of radius 1; larger circles get more
const MIN_CIRCLE_SEGMENTS: u32 = 12;
const MAX_CIRCLE_SEGMENTS: u32 = 48;

/// Segment count that keeps a circle of `radius` looking round
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 1.5).ceil() as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize * 3);

    for i in 0..segments {
        let a1 = i as f32 / segments as f32 * TAU;
        let a2 = (i + 1) as f32 / segments as f32 * TAU;
        let p1 = center + Vec2::new(a1.cos(), a1.sin()) * radius;
        let p2 = center + Vec2::new(a2.cos(), a2.sin()) * radius;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle from its top-left corner
pub fn rect(origin: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = origin + size;
    vec![
        Vertex::new(origin.x, origin.y, color),
        Vertex::new(max.x, origin.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(origin.x, origin.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(origin.x, max.y, color),
    ]
}

/// Generate vertices for a thick line segment
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Background plus proportional fill; an empty bar draws only the background
pub fn health_bar(bar: &HealthBar) -> Vec<Vertex> {
    let mut vertices = rect(bar.origin, bar.size, bar.back);
    let inner = bar.size - Vec2::splat(bar.inset * 2.0);
    let fill_width = (inner.x * bar.fraction.clamp(0.0, 1.0)).floor();
    if fill_width > 0.0 && inner.y > 0.0 {
        vertices.extend(rect(
            bar.origin + Vec2::splat(bar.inset),
            Vec2::new(fill_width, inner.y),
            bar.fill,
        ));
    }
    vertices
}

/// Tessellate every shape in `scene`, back to front
///
/// Text is left to the shell; the overlay contributes its dimming quad.
pub fn scene_vertices(scene: &Scene) -> Vec<Vertex> {
    let mut vertices = rect(Vec2::ZERO, scene.size, scene.background);

    for c in &scene.circles {
        vertices.extend(circle(c.center, c.radius, c.color, circle_segments(c.radius)));
    }
    for l in &scene.lines {
        vertices.extend(line(l.from, l.to, l.width, l.color));
    }
    for bar in &scene.bars {
        vertices.extend(health_bar(bar));
    }
    if let Some(overlay) = &scene.overlay {
        vertices.extend(rect(Vec2::ZERO, scene.size, [0.0, 0.0, 0.0, overlay.dim]));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_circle_vertices_on_rim() {
        let center = Vec2::new(10.0, 20.0);
        let verts = circle(center, 5.0, colors::ZOMBIE, 16);
        assert_eq!(verts.len(), 48);
        for tri in verts.chunks(3) {
            assert_eq!(tri[0].position, [10.0, 20.0]);
            let rim = Vec2::from(tri[1].position);
            assert!((rim.distance(center) - 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(3.0, 3.0);
        assert!(line(p, p, 6.0, colors::GUN).is_empty());
        assert_eq!(line(p, p + Vec2::X, 6.0, colors::GUN).len(), 6);
    }

    #[test]
    fn test_health_bar_fill() {
        let bar = HealthBar {
            origin: Vec2::ZERO,
            size: Vec2::new(60.0, 8.0),
            fraction: 0.5,
            inset: 1.0,
            fill: colors::PLAYER_HEALTH,
            back: colors::BAR_BACK,
        };
        let verts = health_bar(&bar);
        assert_eq!(verts.len(), 12);
        // Fill spans 29 of the 58 inner pixels
        assert_eq!(verts[7].position, [30.0, 1.0]);

        let empty = HealthBar { fraction: 0.0, ..bar };
        assert_eq!(health_bar(&empty).len(), 6);
    }

    #[test]
    fn test_scene_tessellation() {
        use crate::sim::GameState;
        use crate::tuning::Tuning;

        let mut state = GameState::start_level(1, Tuning::default(), 3, 0);
        let scene = Scene::from_state(&state, Vec2::new(600.0, 300.0));
        let verts = scene_vertices(&scene);
        assert_eq!(verts.len() % 3, 0);
        assert!(verts.len() > 6, "player, barrel and health bar are drawn");
        assert!(verts[..6].iter().all(|v| v.color == scene.background));

        state.end_game();
        let scene = Scene::from_state(&state, Vec2::ZERO);
        let dim = scene.overlay.as_ref().map(|o| o.dim).unwrap();
        let verts = scene_vertices(&scene);
        let last = &verts[verts.len() - 6..];
        assert!(last.iter().all(|v| v.color == [0.0, 0.0, 0.0, dim]));
    }

    #[test]
    fn test_segments_clamped() {
        assert_eq!(circle_segments(1.0), MIN_CIRCLE_SEGMENTS);
        assert_eq!(circle_segments(20.0), 30);
        assert_eq!(circle_segments(500.0), MAX_CIRCLE_SEGMENTS);
    }
}
