/*
 * Boid Flocking Simulation - Module Definitions
 *
 * Flocking boids, predators and static obstacles on a wrap-around plane.
 * The core is pure state update: a World is ticked, and presentation layers
 * read positions and orientations afterwards. The nannou viewer in the
 * binary is one such layer.
 */

// Re-export key components for easier access
pub use agent::{Agent, AgentKind, EntityId, Obstacle, SteeringWeights};
pub use debug::{DebugInfo, TickStats};
pub use error::SimError;
pub use params::{ControlWeights, SimulationParams, WeightKind};
pub use spatial_grid::SpatialGrid;
pub use world::{EntityKind, RenderItem, World};

// Define modules
pub mod agent;
pub mod debug;
pub mod error;
pub mod params;
pub mod physics;
pub mod spatial_grid;
pub mod world;
