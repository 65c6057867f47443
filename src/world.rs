/*
 * World Module
 *
 * The World owns every agent and obstacle, the spatial grid that indexes
 * the agents, the control weights and the random source. It is the only
 * mutator of shared state.
 *
 * A tick runs in two phases:
 * 1. every agent snapshots its velocity, then steers against that frozen
 *    snapshot (read-only, optionally in parallel)
 * 2. the new velocities are applied one agent at a time and the World
 *    re-buckets each moved agent in the grid
 * No agent ever observes another agent's already-updated state.
 */

use std::time::Instant;

use nannou::prelude::{vec2, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::agent::{
    prune, Agent, AgentKind, EntityId, IdGenerator, Neighborhood, Obstacle, SteeringWeights,
    BOID_EVASION_WEIGHT, PREDATOR_WEIGHTS,
};
use crate::debug::TickStats;
use crate::error::{Result, SimError};
use crate::params::{ControlWeights, SimulationParams, WeightKind};
use crate::physics;
use crate::spatial_grid::SpatialGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Boid,
    Predator,
    Obstacle,
}

impl From<AgentKind> for EntityKind {
    fn from(kind: AgentKind) -> Self {
        match kind {
            AgentKind::Boid => EntityKind::Boid,
            AgentKind::Predator => EntityKind::Predator,
        }
    }
}

// What a render sink receives for each live entity after a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderItem {
    pub id: EntityId,
    pub position: Vec2,
    // Heading scaled by radius; zero for obstacles
    pub orientation: Vec2,
    pub kind: EntityKind,
    pub radius: f32,
}

// Result of phase one for a single agent
struct Steering {
    velocity: Vec2,
    neighbors: usize,
    pruned: bool,
}

pub struct World {
    params: SimulationParams,
    size: Vec2,
    agents: Vec<Agent>,
    // Registry slots of the predators in `agents`
    predators: Vec<usize>,
    obstacles: Vec<Obstacle>,
    grid: SpatialGrid,
    weights: ControlWeights,
    ids: IdGenerator,
    rng: StdRng,
}

impl World {
    // An empty world. Seeded from `params.seed` when present.
    pub fn new(params: SimulationParams) -> Result<Self> {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(params, rng)
    }

    // An empty world drawing every random decision from `rng`.
    pub fn with_rng(params: SimulationParams, rng: StdRng) -> Result<Self> {
        params.validate()?;

        let size = vec2(params.world_width, params.world_height);
        let grid = SpatialGrid::new(params.cell_size, params.world_width, params.world_height)?;
        info!(
            width = params.world_width,
            height = params.world_height,
            cols = grid.cols,
            rows = grid.rows,
            "created world"
        );

        Ok(Self {
            weights: params.weights,
            params,
            size,
            agents: Vec::new(),
            predators: Vec::new(),
            obstacles: Vec::new(),
            grid,
            ids: IdGenerator::default(),
            rng,
        })
    }

    // Create `n` boids at uniformly random positions and velocities.
    pub fn populate(&mut self, n: usize, radius: f32, sight: f32) -> Result<()> {
        if !(radius.is_finite() && radius >= 0.0) {
            return Err(SimError::InvalidConfig("boid radius must be finite and non-negative"));
        }
        if !(sight.is_finite() && sight > 0.0) {
            return Err(SimError::InvalidConfig("boid sight must be finite and positive"));
        }

        self.agents.reserve(n);
        for _ in 0..n {
            let position = vec2(
                self.rng.gen_range(0.0..self.size.x),
                self.rng.gen_range(0.0..self.size.y),
            );
            let velocity = self.random_velocity();
            let id = self.ids.next_id();
            let agent = Agent::new(
                id,
                AgentKind::Boid,
                position,
                velocity,
                radius,
                sight,
                self.params.boid_max_speed,
            );
            self.register(agent);
        }

        info!(boids = n, total = self.agents.len(), "populated world");
        Ok(())
    }

    // Create an agent of `kind` at `position` (wrapped) with an explicit velocity.
    pub fn spawn(&mut self, kind: AgentKind, position: Vec2, velocity: Vec2) -> EntityId {
        let (radius, sight, max_speed) = match kind {
            AgentKind::Boid => (
                self.params.boid_radius,
                self.params.boid_sight,
                self.params.boid_max_speed,
            ),
            AgentKind::Predator => (
                self.params.predator_radius,
                self.params.predator_sight,
                self.params.predator_max_speed,
            ),
        };
        let position = physics::wrap_position(position, self.size);
        let id = self.ids.next_id();
        self.register(Agent::new(id, kind, position, velocity, radius, sight, max_speed));
        id
    }

    pub fn add_predator(&mut self, point: Vec2) -> EntityId {
        let velocity = self.random_velocity();
        let id = self.spawn(AgentKind::Predator, point, velocity);
        info!(%id, x = point.x, y = point.y, "added predator");
        id
    }

    pub fn add_obstacle(&mut self, point: Vec2) -> EntityId {
        let id = self.ids.next_id();
        let position = physics::wrap_position(point, self.size);
        self.obstacles.push(Obstacle {
            id,
            position,
            radius: self.params.obstacle_radius,
        });
        info!(%id, x = position.x, y = position.y, "added obstacle");
        id
    }

    // Remove the first obstacle whose bounding square contains `point`.
    pub fn remove_obstacle(&mut self, point: Vec2) -> Option<Obstacle> {
        let Some(index) = self.obstacles.iter().position(|o| o.bounds_contain(point)) else {
            debug!(x = point.x, y = point.y, "no obstacle to remove");
            return None;
        };
        let obstacle = self.obstacles.remove(index);
        info!(id = %obstacle.id, "removed obstacle");
        Some(obstacle)
    }

    // Set a control weight in raw units (the value a slider reports)
    pub fn set_weight(&mut self, kind: WeightKind, raw: f32) -> Result<()> {
        self.weights.set(kind, raw)?;
        debug!(%kind, raw, "weight changed");
        Ok(())
    }

    pub fn separation_weight(&self) -> f32 {
        self.weights.scaled(WeightKind::Separation)
    }

    pub fn cohesion_weight(&self) -> f32 {
        self.weights.scaled(WeightKind::Cohesion)
    }

    pub fn alignment_weight(&self) -> f32 {
        self.weights.scaled(WeightKind::Alignment)
    }

    pub fn avoidance_weight(&self) -> f32 {
        self.weights.scaled(WeightKind::Avoidance)
    }

    pub fn weights(&self) -> ControlWeights {
        self.weights
    }

    pub fn boid_weights(&self) -> SteeringWeights {
        SteeringWeights {
            separation: self.separation_weight(),
            cohesion: self.cohesion_weight(),
            alignment: self.alignment_weight(),
            avoidance: self.avoidance_weight(),
            evasion: BOID_EVASION_WEIGHT,
            chase: 0.0,
        }
    }

    // Advance the simulation by `dt` milliseconds.
    pub fn tick(&mut self, dt: f32) -> TickStats {
        debug_assert!(dt.is_finite(), "tick with non-finite dt {dt}");
        let started = Instant::now();

        for agent in &mut self.agents {
            agent.begin_tick();
        }

        // Drawn up front so that the outcome does not depend on scheduling
        let seeds: Vec<u64> = (0..self.agents.len()).map(|_| self.rng.gen()).collect();

        let world = &*self;
        let steering: Vec<Steering> = if world.params.enable_parallel {
            seeds
                .par_iter()
                .enumerate()
                .map(|(slot, &seed)| world.steer_slot(slot, seed))
                .collect()
        } else {
            seeds
                .iter()
                .enumerate()
                .map(|(slot, &seed)| world.steer_slot(slot, seed))
                .collect()
        };

        let mut stats = TickStats {
            agents_updated: steering.len(),
            ..TickStats::default()
        };

        for (slot, result) in steering.into_iter().enumerate() {
            stats.neighbors_considered += result.neighbors;
            stats.pruned_neighborhoods += usize::from(result.pruned);

            let agent = &mut self.agents[slot];
            let moved = agent.integrate(result.velocity, dt, self.size);
            let id = agent.id;
            self.grid.move_agent(id, slot, moved.from, moved.to);
        }

        stats.elapsed = started.elapsed();
        debug!(
            agents = stats.agents_updated,
            neighbors = stats.neighbors_considered,
            pruned = stats.pruned_neighborhoods,
            elapsed_us = stats.elapsed.as_micros() as u64,
            "tick complete"
        );
        stats
    }

    // Neighborhood of the agent in `slot`, as seen at the start of a tick.
    // The flag reports whether any set was sampled down
    pub fn neighborhood<R: Rng + ?Sized>(&self, slot: usize, rng: &mut R) -> (Neighborhood<'_>, bool) {
        let agent = &self.agents[slot];
        let limit = self.params.max_neighbors;
        let mut pruned = false;

        let obstacles = self
            .obstacles
            .iter()
            .filter(|obstacle| obstacle.position.distance(agent.position) < agent.sight)
            .collect();

        let nearby_boids = self.nearby_boids(slot);
        pruned |= nearby_boids.len() > limit;
        let nearby_boids: Vec<&Agent> = prune(nearby_boids, limit, rng)
            .into_iter()
            .map(|other| &self.agents[other])
            .collect();

        let predators_in_sight = self
            .predators
            .iter()
            .copied()
            .filter(|&other| other != slot && self.within_sight(agent, &self.agents[other]));

        let neighborhood = match agent.kind {
            AgentKind::Boid => Neighborhood {
                flock: nearby_boids,
                prey: Vec::new(),
                predators: predators_in_sight.map(|other| &self.agents[other]).collect(),
                obstacles,
            },
            AgentKind::Predator => {
                let pack: Vec<usize> = predators_in_sight.collect();
                pruned |= pack.len() > limit;
                Neighborhood {
                    flock: prune(pack, limit, rng)
                        .into_iter()
                        .map(|other| &self.agents[other])
                        .collect(),
                    prey: nearby_boids,
                    predators: Vec::new(),
                    obstacles,
                }
            }
        };

        (neighborhood, pruned)
    }

    // Boid slots near the agent in `slot`, excluding itself, in ascending order
    fn nearby_boids(&self, slot: usize) -> Vec<usize> {
        let agent = &self.agents[slot];
        let mut nearby = if self.params.enable_spatial_grid {
            let mut found = self.grid.query_radius(agent.position, agent.sight);
            found.retain(|&other| other != slot && self.agents[other].is_boid());
            found
        } else {
            self.agents
                .iter()
                .enumerate()
                .filter(|&(other, candidate)| {
                    other != slot && candidate.is_boid() && self.within_sight(agent, candidate)
                })
                .map(|(other, _)| other)
                .collect()
        };
        // Grid buckets iterate in hash order; sort so sampling is reproducible
        nearby.sort_unstable();
        nearby
    }

    fn within_sight(&self, agent: &Agent, other: &Agent) -> bool {
        agent.position.distance(other.position) < agent.sight
    }

    fn steer_slot(&self, slot: usize, seed: u64) -> Steering {
        let mut rng = StdRng::seed_from_u64(seed);
        let (neighborhood, pruned) = self.neighborhood(slot, &mut rng);
        let agent = &self.agents[slot];
        let weights = match agent.kind {
            AgentKind::Boid => self.boid_weights(),
            AgentKind::Predator => PREDATOR_WEIGHTS,
        };

        Steering {
            velocity: agent.steer(&neighborhood, &weights),
            neighbors: neighborhood.flock.len() + neighborhood.prey.len(),
            pruned,
        }
    }

    fn register(&mut self, agent: Agent) {
        let slot = self.agents.len();
        self.grid.insert(agent.id, slot, agent.position);
        if agent.is_predator() {
            self.predators.push(slot);
        }
        self.agents.push(agent);
    }

    fn random_velocity(&mut self) -> Vec2 {
        let range = self.params.initial_speed_range;
        vec2(
            self.rng.gen_range(-range..=range),
            self.rng.gen_range(-range..=range),
        )
    }

    // Every live agent and obstacle, for drawing
    pub fn render_items(&self) -> impl Iterator<Item = RenderItem> + '_ {
        let agents = self.agents.iter().map(|agent| RenderItem {
            id: agent.id,
            position: agent.position,
            orientation: agent.orientation(),
            kind: agent.kind.into(),
            radius: agent.radius,
        });
        let obstacles = self.obstacles.iter().map(|obstacle| RenderItem {
            id: obstacle.id,
            position: obstacle.position,
            orientation: Vec2::ZERO,
            kind: EntityKind::Obstacle,
            radius: obstacle.radius,
        });
        agents.chain(obstacles)
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: EntityId) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.id == id)
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn grid(&self) -> &SpatialGrid {
        &self.grid
    }

    pub fn boid_count(&self) -> usize {
        self.agents.len() - self.predators.len()
    }

    pub fn predator_count(&self) -> usize {
        self.predators.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: u64) -> SimulationParams {
        SimulationParams {
            seed: Some(seed),
            ..SimulationParams::default()
        }
    }

    fn busy_world(seed: u64, parallel: bool) -> World {
        let mut params = params(seed);
        params.enable_parallel = parallel;
        params.weights = ControlWeights {
            separation: 100.0,
            cohesion: 20.0,
            alignment: 30.0,
            avoidance: 50.0,
        };
        let mut world = World::new(params).unwrap();
        world.populate(120, 8.0, 80.0).unwrap();
        world.add_predator(vec2(400.0, 240.0));
        world.add_predator(vec2(100.0, 100.0));
        world.add_obstacle(vec2(300.0, 300.0));
        world.add_obstacle(vec2(600.0, 100.0));
        world
    }

    fn assert_grid_consistent(world: &World) {
        assert_eq!(world.grid().len(), world.agents().len());
        for agent in world.agents() {
            assert!(world.grid().contains(agent.id, agent.position), "{} not indexed", agent.id);
        }
    }

    #[test]
    fn populate_registers_every_boid() {
        let mut world = World::new(params(1)).unwrap();
        world.populate(25, 8.0, 80.0).unwrap();
        assert_eq!(world.boid_count(), 25);
        assert_eq!(world.predator_count(), 0);
        assert_grid_consistent(&world);

        let size = world.size();
        for agent in world.agents() {
            assert!(agent.position.x >= 0.0 && agent.position.x < size.x);
            assert!(agent.position.y >= 0.0 && agent.position.y < size.y);
        }
    }

    #[test]
    fn populate_rejects_bad_sight() {
        let mut world = World::new(params(1)).unwrap();
        assert!(world.populate(5, 8.0, 0.0).is_err());
        assert!(world.populate(5, -1.0, 80.0).is_err());
        assert!(world.populate(5, 8.0, f32::INFINITY).is_err());
        assert!(world.populate(5, f32::NAN, 80.0).is_err());
        assert_eq!(world.agents().len(), 0);
    }

    #[test]
    fn unbounded_world_is_rejected() {
        let mut params = params(1);
        params.world_width = f32::INFINITY;
        assert!(matches!(World::new(params), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn sight_larger_than_world_sees_every_boid() {
        let mut params = params(1);
        params.boid_sight = 1.0e30;
        let mut world = World::new(params).unwrap();
        world.populate(20, 8.0, 1.0e30).unwrap();

        let stats = world.tick(16.0);
        // 19 visible boids each, sampled down to 15
        assert_eq!(stats.neighbors_considered, 20 * 15);
        assert_eq!(stats.pruned_neighborhoods, 20);
    }

    #[test]
    fn ids_are_unique_across_entities() {
        let mut world = World::new(params(2)).unwrap();
        world.populate(3, 8.0, 80.0).unwrap();
        let predator = world.add_predator(vec2(10.0, 10.0));
        let obstacle = world.add_obstacle(vec2(20.0, 20.0));
        let mut ids: Vec<EntityId> = world.render_items().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(predator, EntityId(3));
        assert_eq!(obstacle, EntityId(4));
    }

    #[test]
    fn ticks_preserve_speed_torus_and_index_invariants() {
        let mut world = busy_world(3, true);
        let size = world.size();
        for _ in 0..60 {
            world.tick(33.0);
            assert_grid_consistent(&world);
            for agent in world.agents() {
                assert!((agent.velocity.length() - agent.max_speed).abs() < 1e-5);
                assert!(agent.position.x >= 0.0 && agent.position.x < size.x);
                assert!(agent.position.y >= 0.0 && agent.position.y < size.y);
            }
        }
    }

    #[test]
    fn parallel_and_sequential_ticks_agree() {
        let mut parallel = busy_world(4, true);
        let mut sequential = busy_world(4, false);
        for _ in 0..20 {
            parallel.tick(33.0);
            sequential.tick(33.0);
        }
        assert_eq!(parallel.agents(), sequential.agents());
    }

    #[test]
    fn same_seed_gives_same_run() {
        let mut first = busy_world(5, true);
        let mut second = busy_world(5, true);
        for _ in 0..10 {
            first.tick(16.0);
            second.tick(16.0);
        }
        assert_eq!(first.agents(), second.agents());
    }

    #[test]
    fn tick_does_not_depend_on_processing_order() {
        let mut params = params(6);
        params.weights = ControlWeights {
            separation: 100.0,
            cohesion: 50.0,
            alignment: 50.0,
            avoidance: 0.0,
        };
        let a = (vec2(100.0, 100.0), vec2(0.1, 0.0));
        let b = (vec2(120.0, 110.0), vec2(0.0, 0.1));
        let c = (vec2(90.0, 130.0), vec2(-0.07, 0.07));

        let mut forward = World::new(params.clone()).unwrap();
        for (position, velocity) in [a, b, c] {
            forward.spawn(AgentKind::Boid, position, velocity);
        }
        let mut backward = World::new(params).unwrap();
        for (position, velocity) in [c, b, a] {
            backward.spawn(AgentKind::Boid, position, velocity);
        }

        forward.tick(33.0);
        backward.tick(33.0);

        let forward = forward.agents();
        let backward = backward.agents();
        for (f, b) in forward.iter().zip(backward.iter().rev()) {
            assert!((f.position - b.position).length() < 1e-4);
            assert!((f.velocity - b.velocity).length() < 1e-6);
        }
    }

    #[test]
    fn zero_weights_give_straight_line_motion() {
        let mut params = params(7);
        params.weights = ControlWeights::zero();
        let mut world = World::new(params).unwrap();
        let velocity = vec2(0.06, -0.08);
        world.spawn(AgentKind::Boid, vec2(790.0, 10.0), velocity);
        world.spawn(AgentKind::Boid, vec2(795.0, 12.0), velocity);

        let size = world.size();
        let start: Vec<Vec2> = world.agents().iter().map(|agent| agent.position).collect();
        let ticks = 500;
        for _ in 0..ticks {
            world.tick(10.0);
        }
        for (agent, origin) in world.agents().iter().zip(start) {
            assert!((agent.velocity - velocity).length() < 1e-6);
            let expected = physics::wrap_position(origin + velocity * 10.0 * ticks as f32, size);
            assert!((agent.position - expected).length() < 5e-2, "{:?} vs {expected:?}", agent.position);
        }
    }

    #[test]
    fn boids_see_predators_and_predators_see_boids() {
        let mut world = World::new(params(8)).unwrap();
        world.spawn(AgentKind::Boid, vec2(100.0, 100.0), vec2(0.1, 0.0));
        world.spawn(AgentKind::Boid, vec2(130.0, 100.0), vec2(0.1, 0.0));
        world.spawn(AgentKind::Predator, vec2(160.0, 100.0), vec2(0.0, 0.1));
        world.spawn(AgentKind::Predator, vec2(700.0, 400.0), vec2(0.0, 0.1));
        world.add_obstacle(vec2(150.0, 150.0));

        let mut rng = StdRng::seed_from_u64(0);
        let (boid_view, _) = world.neighborhood(0, &mut rng);
        assert_eq!(boid_view.flock.len(), 1);
        assert_eq!(boid_view.predators.len(), 1);
        assert_eq!(boid_view.obstacles.len(), 1);
        assert!(boid_view.prey.is_empty());

        let (predator_view, _) = world.neighborhood(2, &mut rng);
        assert_eq!(predator_view.prey.len(), 2);
        assert!(predator_view.flock.is_empty());
        assert!(predator_view.predators.is_empty());
    }

    #[test]
    fn crowded_neighborhoods_are_pruned() {
        let mut world = World::new(params(9)).unwrap();
        for i in 0..30 {
            world.spawn(AgentKind::Boid, vec2(200.0 + i as f32, 200.0), vec2(0.1, 0.0));
        }
        let (view, pruned) = world.neighborhood(0, &mut StdRng::seed_from_u64(1));
        assert!(pruned);
        assert_eq!(view.flock.len(), world.params().max_neighbors);
        assert!(view.flock.iter().all(|other| other.id != world.agents()[0].id));

        let stats = world.tick(1.0);
        assert_eq!(stats.agents_updated, 30);
        assert_eq!(stats.pruned_neighborhoods, 30);
        assert_eq!(stats.neighbors_considered, 30 * 15);
    }

    #[test]
    fn brute_force_backend_keeps_invariants() {
        let mut params = params(10);
        params.enable_spatial_grid = false;
        let mut world = World::new(params).unwrap();
        world.populate(60, 8.0, 80.0).unwrap();
        for _ in 0..20 {
            world.tick(33.0);
        }
        assert_grid_consistent(&world);
        for agent in world.agents() {
            assert!((agent.velocity.length() - agent.max_speed).abs() < 1e-5);
        }
    }

    #[test]
    fn remove_obstacle_takes_at_most_one() {
        let mut world = World::new(params(11)).unwrap();
        let first = world.add_obstacle(vec2(100.0, 100.0));
        let second = world.add_obstacle(vec2(110.0, 100.0));

        let removed = world.remove_obstacle(vec2(105.0, 100.0)).unwrap();
        assert_eq!(removed.id, first);
        assert_eq!(world.obstacles().len(), 1);
        assert_eq!(world.obstacles()[0].id, second);

        assert!(world.remove_obstacle(vec2(500.0, 400.0)).is_none());
        assert_eq!(world.obstacles().len(), 1);
    }

    #[test]
    fn weights_are_scaled_control_values() {
        let mut world = World::new(params(12)).unwrap();
        world.set_weight(WeightKind::Separation, 150.0).unwrap();
        world.set_weight(WeightKind::Cohesion, 25.0).unwrap();
        assert!((world.separation_weight() - 1.5).abs() < 1e-6);
        assert!((world.cohesion_weight() - 0.25).abs() < 1e-6);
        assert_eq!(world.alignment_weight(), 0.0);
        assert!((world.avoidance_weight() - 0.1).abs() < 1e-6);

        assert!(world.set_weight(WeightKind::Alignment, -5.0).is_err());
        assert_eq!(world.weights().alignment, 0.0);
    }

    #[test]
    fn render_items_cover_agents_and_obstacles() {
        let mut world = World::new(params(13)).unwrap();
        world.spawn(AgentKind::Boid, vec2(10.0, 10.0), vec2(0.0, 0.1));
        world.add_predator(vec2(50.0, 50.0));
        world.add_obstacle(vec2(900.0, 20.0));

        let items: Vec<RenderItem> = world.render_items().collect();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].kind, EntityKind::Boid);
        assert!((items[0].orientation - vec2(0.0, 8.0)).length() < 1e-6);
        assert_eq!(items[1].kind, EntityKind::Predator);
        assert_eq!(items[1].radius, 10.0);
        assert_eq!(items[2].kind, EntityKind::Obstacle);
        assert_eq!(items[2].orientation, Vec2::ZERO);
        // Placed points wrap into the world
        assert!((items[2].position - vec2(100.0, 20.0)).length() < 1e-4);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = SimulationParams {
            world_width: 0.0,
            ..SimulationParams::default()
        };
        assert!(matches!(World::new(params), Err(SimError::InvalidConfig(_))));
    }
}
