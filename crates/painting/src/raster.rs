//! Stroke rasterization
//!
//! A stroke is the union of capsules around its segments, which gives round
//! joins and round caps for free. Coverage is accumulated per stroke with
//! `max` and blended once, so a stroke that crosses itself never darkens
//! where it overlaps.

use glam::Vec2;
use tracing::debug;

use crate::constants::{EDGE_FEATHER, MIN_SEGMENT_LENGTH};
use crate::surface::CpuSurface;
use crate::types::Stroke;

/// Paint `stroke` onto `surface`
///
/// `density` converts the stroke's device-independent thickness to pixels.
/// Returns bounding box of affected region (x, y, width, height), or None if
/// the stroke is completely outside the surface.
pub fn rasterize_stroke(
    surface: &mut CpuSurface,
    stroke: &Stroke,
    density: f32,
) -> Option<(u32, u32, u32, u32)> {
    let radius = stroke.thickness() * density / 2.0;
    if radius.is_nan() || radius <= 0.0 {
        return None;
    }
    let reach = radius + EDGE_FEATHER;

    let points = stroke.points();
    let (lo, hi) = points.iter().fold(
        (Vec2::splat(f32::INFINITY), Vec2::splat(f32::NEG_INFINITY)),
        |(lo, hi), p| (lo.min(*p), hi.max(*p)),
    );
    let (x_min, y_min, x_max, y_max) = clamp_bounds(surface, lo - reach, hi + reach)?;

    let mask_width = (x_max - x_min) as usize;
    let mut coverage = vec![0.0f32; mask_width * (y_max - y_min) as usize];

    let single = [points[0], points[0]];
    let segments = if points.len() < 2 { &single[..] } else { points };

    for segment in segments.windows(2) {
        let (a, b) = (segment[0], segment[1]);
        let Some((sx0, sy0, sx1, sy1)) = clamp_bounds(surface, a.min(b) - reach, a.max(b) + reach)
        else {
            continue;
        };

        for py in sy0.max(y_min)..sy1.min(y_max) {
            for px in sx0.max(x_min)..sx1.min(x_max) {
                let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let distance = distance_to_segment(center, a, b);
                let cov = edge_coverage(distance, radius);
                if cov > 0.0 {
                    let index = (py - y_min) as usize * mask_width + (px - x_min) as usize;
                    coverage[index] = coverage[index].max(cov);
                }
            }
        }
    }

    let color = stroke.color().to_array();
    for (i, cov) in coverage.iter().enumerate() {
        if *cov > 0.0 {
            let px = x_min + (i % mask_width) as u32;
            let py = y_min + (i / mask_width) as u32;
            surface.blend_pixel(px, py, color, *cov);
        }
    }

    debug!(
        "Rasterized stroke: {} points, radius={:.1}px -> ({}, {}) {}x{}",
        points.len(),
        radius,
        x_min,
        y_min,
        x_max - x_min,
        y_max - y_min
    );

    Some((x_min, y_min, x_max - x_min, y_max - y_min))
}

/// Clamp a float bounding box to the surface, None if nothing remains
fn clamp_bounds(surface: &CpuSurface, lo: Vec2, hi: Vec2) -> Option<(u32, u32, u32, u32)> {
    let x_min = (lo.x.floor().max(0.0) as u32).min(surface.width);
    let y_min = (lo.y.floor().max(0.0) as u32).min(surface.height);
    let x_max = (hi.x.ceil().max(0.0) as u32).min(surface.width);
    let y_max = (hi.y.ceil().max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        return None;
    }
    Some((x_min, y_min, x_max, y_max))
}

/// Shortest distance from `p` to the segment `a`-`b`
#[inline]
pub fn distance_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < MIN_SEGMENT_LENGTH * MIN_SEGMENT_LENGTH {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Anti-aliased coverage of a pixel whose center is `distance` from the stroke spine
#[inline]
fn edge_coverage(distance: f32, radius: f32) -> f32 {
    ((radius + EDGE_FEATHER / 2.0 - distance) / EDGE_FEATHER).clamp(0.0, 1.0)
}
