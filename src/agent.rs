/*
 * Agent Module
 *
 * This module defines the moving agents (boids and predators), the static
 * obstacles, and the per-kind steering policy.
 *
 * Updating an agent is split in two so the World can run a tick against a
 * frozen snapshot:
 * 1. `steer` is read-only and turns a neighborhood into a new velocity
 * 2. `integrate` applies that velocity and reports the position change
 * The agent never touches the spatial index itself.
 */

use std::fmt;

use nannou::prelude::{vec2, Vec2};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::physics;

// Stable identifier for agents and obstacles, unique within a World
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Monotonic id source owned by a World
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentKind {
    Boid,
    Predator,
}

// Weights applied to each steering force before summation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringWeights {
    pub separation: f32,
    pub cohesion: f32,
    pub alignment: f32,
    pub avoidance: f32,
    pub evasion: f32,
    pub chase: f32,
}

impl SteeringWeights {
    pub const ZERO: SteeringWeights = SteeringWeights {
        separation: 0.0,
        cohesion: 0.0,
        alignment: 0.0,
        avoidance: 0.0,
        evasion: 0.0,
        chase: 0.0,
    };
}

// Predators do not take their weights from the control sink
pub const PREDATOR_WEIGHTS: SteeringWeights = SteeringWeights {
    separation: 0.05,
    cohesion: 0.50,
    alignment: 0.30,
    avoidance: 0.10,
    evasion: 0.0,
    chase: 0.50,
};

// Boids flee predators at full strength
pub const BOID_EVASION_WEIGHT: f32 = 1.0;

// Static obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub id: EntityId,
    pub position: Vec2,
    pub radius: f32,
}

impl Obstacle {
    // Axis-aligned bounding square, half-open on the far sides
    pub fn bounds_contain(&self, point: Vec2) -> bool {
        let min = self.position - Vec2::splat(self.radius);
        let max = self.position + Vec2::splat(self.radius);
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }
}

// Everything an agent may look at while steering, gathered before the tick
#[derive(Debug, Default)]
pub struct Neighborhood<'a> {
    // Same-kind agents the agent flocks with
    pub flock: Vec<&'a Agent>,
    // Boids a predator is chasing
    pub prey: Vec<&'a Agent>,
    // Predators a boid is fleeing
    pub predators: Vec<&'a Agent>,
    pub obstacles: Vec<&'a Obstacle>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moved {
    pub from: Vec2,
    pub to: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: EntityId,
    pub kind: AgentKind,
    pub position: Vec2,
    pub velocity: Vec2,
    // Velocity at the start of the current tick; neighbors read this one
    pub previous_velocity: Vec2,
    pub radius: f32,
    pub sight: f32,
    pub max_speed: f32,
}

impl Agent {
    // A zero `velocity` is replaced by an eastward heading at `max_speed`.
    pub fn new(
        id: EntityId,
        kind: AgentKind,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        sight: f32,
        max_speed: f32,
    ) -> Self {
        let velocity = if velocity.length_squared() > 0.0 {
            velocity
        } else {
            vec2(max_speed, 0.0)
        };

        Self {
            id,
            kind,
            position,
            velocity,
            previous_velocity: velocity,
            radius,
            sight,
            max_speed,
        }
    }

    pub fn is_boid(&self) -> bool {
        self.kind == AgentKind::Boid
    }

    pub fn is_predator(&self) -> bool {
        self.kind == AgentKind::Predator
    }

    // Snapshot the velocity this tick's forces are computed from
    pub fn begin_tick(&mut self) {
        self.previous_velocity = self.velocity;
    }

    // New velocity for this tick, always of length `max_speed`.
    pub fn steer(&self, neighborhood: &Neighborhood<'_>, weights: &SteeringWeights) -> Vec2 {
        let steering = self.steering_force(neighborhood, weights);
        self.limit_speed(self.previous_velocity + steering)
    }

    // Weighted sum of every steering force acting on the agent
    pub fn steering_force(&self, neighborhood: &Neighborhood<'_>, weights: &SteeringWeights) -> Vec2 {
        let flock_positions = || neighborhood.flock.iter().map(|other| other.position);

        let mut force = Vec2::ZERO;
        force += physics::separation(self.position, flock_positions()) * weights.separation;
        force += physics::cohesion(self.position, flock_positions()) * weights.cohesion;
        force += physics::alignment(
            self.previous_velocity,
            neighborhood.flock.iter().map(|other| other.previous_velocity),
        ) * weights.alignment;
        force += physics::obstacle_avoidance(
            self.position,
            self.previous_velocity,
            self.sight,
            self.radius,
            neighborhood.obstacles.iter().copied(),
        ) * weights.avoidance;

        match self.kind {
            AgentKind::Boid => {
                force += physics::evasion(
                    self.position,
                    neighborhood.predators.iter().map(|predator| predator.position),
                ) * weights.evasion;
            }
            AgentKind::Predator => {
                force += physics::cohesion(
                    self.position,
                    neighborhood.prey.iter().map(|boid| boid.position),
                ) * weights.chase;
            }
        }

        force
    }

    // Hard reset to max speed, keeping the heading
    fn limit_speed(&self, velocity: Vec2) -> Vec2 {
        let mut heading = physics::normalize_or_zero(velocity);
        if heading == Vec2::ZERO {
            // Forces cancelled the velocity exactly; keep the old heading
            heading = physics::normalize_or_zero(self.previous_velocity);
        }
        if heading == Vec2::ZERO {
            heading = vec2(1.0, 0.0);
        }
        heading * self.max_speed
    }

    // Apply `velocity` for `dt` milliseconds and wrap onto the torus.
    pub fn integrate(&mut self, velocity: Vec2, dt: f32, world_size: Vec2) -> Moved {
        let from = self.position;
        self.velocity = velocity;
        self.position = physics::wrap_position(self.position + velocity * dt, world_size);
        Moved {
            from,
            to: self.position,
        }
    }

    pub fn orientation(&self) -> Vec2 {
        physics::normalize_or_zero(self.velocity) * self.radius
    }
}

// Keep at most `limit` neighbors, sampled uniformly without replacement.
pub fn prune<T: Copy, R: Rng + ?Sized>(neighbors: Vec<T>, limit: usize, rng: &mut R) -> Vec<T> {
    if neighbors.len() <= limit {
        return neighbors;
    }
    neighbors.choose_multiple(rng, limit).copied().collect()
}
