/*
 * Physics Module
 *
 * Pure steering-force functions over neighbor sets, plus the vector helpers
 * and torus wrapping used when integrating positions.
 *
 * Every force reads the snapshot handed to it (positions and previous
 * velocities captured before anyone moved this tick) and returns a plain
 * vector; weighting and summation are left to the caller. An empty
 * neighbor set always yields the zero vector.
 */

use nannou::prelude::Vec2;

use crate::agent::Obstacle;

// Distances below this are treated as coincident.
pub const EPSILON: f32 = 1e-6;

// Cohesion moves an agent toward the local centroid by 1% per update.
pub const COHESION_DAMPING: f32 = 1.0 / 100.0;

// Alignment closes 1/8 of the heading gap per update.
pub const ALIGNMENT_DAMPING: f32 = 1.0 / 8.0;

// Unit vector in the direction of `v`; the zero vector maps to itself.
#[inline]
pub fn normalize_or_zero(v: Vec2) -> Vec2 {
    let length_squared = v.length_squared();
    if length_squared > 0.0 && length_squared.is_finite() {
        v / length_squared.sqrt()
    } else {
        Vec2::ZERO
    }
}

// Wrap a coordinate into `[0, size)`.
#[inline]
pub fn wrap_coordinate(value: f32, size: f32) -> f32 {
    let wrapped = value.rem_euclid(size);
    // rem_euclid can round up to `size` for tiny negative inputs
    if wrapped >= size {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn wrap_position(position: Vec2, world_size: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coordinate(position.x, world_size.x),
        wrap_coordinate(position.y, world_size.y),
    )
}

// Linear repulsion: each neighbor contributes the unit vector pointing away
// from it scaled by `1 / distance`, and the contributions are averaged.
pub fn separation<I>(position: Vec2, neighbors: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    let mut force = Vec2::ZERO;
    let mut count = 0usize;

    for other in neighbors {
        let diff = position - other;
        // diff / |diff| / |diff|
        force += diff / diff.length_squared().max(EPSILON);
        count += 1;
    }

    if count == 0 {
        return Vec2::ZERO;
    }
    force / count as f32
}

pub fn cohesion<I>(position: Vec2, neighbors: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    match average(neighbors) {
        Some(centroid) => (centroid - position) * COHESION_DAMPING,
        None => Vec2::ZERO,
    }
}

// Nudge `previous_velocity` toward the neighbors' average previous velocity.
pub fn alignment<I>(previous_velocity: Vec2, neighbor_velocities: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    match average(neighbor_velocities) {
        Some(heading) => (heading - previous_velocity) * ALIGNMENT_DAMPING,
        None => Vec2::ZERO,
    }
}

// Predators within sight repel with the same law as crowding.
pub fn evasion<I>(position: Vec2, predators: I) -> Vec2
where
    I: IntoIterator<Item = Vec2>,
{
    separation(position, predators)
}

/// Steer away from the single nearest threatening obstacle.
///
/// An obstacle is a threat when its circle touches the lookahead segment
/// from `position + heading * sight / 2` to `position + heading * sight`, or
/// when it already overlaps the agent. The result is the unit vector from
/// the threat's center to the far lookahead point.
pub fn obstacle_avoidance<'a, I>(
    position: Vec2,
    previous_velocity: Vec2,
    sight: f32,
    radius: f32,
    obstacles: I,
) -> Vec2
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    let heading = normalize_or_zero(previous_velocity);
    let ahead = position + heading * sight;
    let ahead2 = position + heading * (sight * 0.5);

    let mut threat: Option<&Obstacle> = None;
    let mut nearest = f32::INFINITY;

    for obstacle in obstacles {
        let distance = position.distance(obstacle.position);
        let threatening = segment_intersects_circle(ahead2, ahead, obstacle.position, obstacle.radius)
            || distance < obstacle.radius + radius;
        // Strict comparison keeps the first obstacle found at the minimal distance
        if threatening && distance < nearest {
            threat = Some(obstacle);
            nearest = distance;
        }
    }

    match threat {
        Some(obstacle) => normalize_or_zero(ahead - obstacle.position),
        None => Vec2::ZERO,
    }
}

pub fn segment_intersects_circle(start: Vec2, end: Vec2, center: Vec2, radius: f32) -> bool {
    let segment = end - start;
    let length_squared = segment.length_squared();
    let t = if length_squared > 0.0 {
        ((center - start).dot(segment) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let closest = start + segment * t;
    closest.distance_squared(center) <= radius * radius
}

fn average<I>(values: I) -> Option<Vec2>
where
    I: IntoIterator<Item = Vec2>,
{
    let mut sum = Vec2::ZERO;
    let mut count = 0usize;
    for value in values {
        sum += value;
        count += 1;
    }
    (count > 0).then(|| sum / count as f32)
}
